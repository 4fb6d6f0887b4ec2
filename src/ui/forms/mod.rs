//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field, inline error and help line rendering
//! - `contact_form`: The contact form layout
//! - `summary`: The panel shown after a successful submit

mod contact_form;
mod field_renderer;
mod summary;

pub use contact_form::draw_contact_form;
