//! Form domain layer
//!
//! This module provides the contact form: its inputs, field rules, the
//! snapshot taken on a successful submit and the render projection.

mod field;
mod form_state;
mod submission;
mod validation;
mod view;

pub use field::Field;
pub use form_state::{ContactForm, Form, FormMode, SubmitOutcome, SUBMIT_BUTTON_INDEX};
pub use submission::{Clock, SystemClock};
#[cfg(test)]
pub use submission::MockClock;
pub use view::{DisplayNode, ErrorNode, FieldView, FormView, SummaryView};
