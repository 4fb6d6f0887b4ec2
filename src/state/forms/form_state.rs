//! Contact form state and the operations driven by key events

use super::field::{Field, FormField};
use super::submission::{Clock, SubmissionResult};
use super::validation::{ValidationError, ValidationErrors};

/// Trait for focus navigation over a form's inputs and buttons
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus index of the submit button (after the four inputs)
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// Observable UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Editing,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { errors: usize },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    errors: ValidationErrors,
    submission: Option<SubmissionResult>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new(Field::FirstName),
            last_name: FormField::new(Field::LastName),
            email: FormField::new(Field::Email),
            message: FormField::new(Field::Message),
            active_field_index: 0,
            errors: ValidationErrors::default(),
            submission: None,
        }
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Move focus to an input
    pub fn focus(&mut self, field: Field) {
        self.active_field_index = Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
    }

    /// The focused input, or None when the submit button has focus
    pub fn active_input(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_input().is_some_and(|f| f.is_multiline())
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            self.field_mut(field).push_char(c);
            self.on_change(field);
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input() {
            self.field_mut(field).pop_char();
            self.on_change(field);
        }
    }

    /// Errors are live: every edit revalidates the edited field
    fn on_change(&mut self, field: Field) {
        let value = self.field(field).value.clone();
        let valid = self.errors.revalidate(field, &value);
        tracing::debug!(field = field.key(), valid, "revalidated field");
    }

    /// Validate every field and, if all pass, snapshot the values
    pub fn submit(&mut self, clock: &dyn Clock) -> SubmitOutcome {
        for field in Field::ALL {
            let value = self.field(field).value.clone();
            self.errors.revalidate(field, &value);
        }

        if !self.errors.is_empty() {
            let errors = self.errors.len();
            let failing: Vec<&str> = self.errors.iter().map(|e| e.field().key()).collect();
            tracing::warn!(errors, ?failing, "contact form submit rejected");
            return SubmitOutcome::Rejected { errors };
        }

        self.submission = Some(SubmissionResult {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
            submitted_at: clock.now(),
        });
        tracing::info!(
            has_message = !self.message.is_empty(),
            "contact form submitted"
        );
        SubmitOutcome::Accepted
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn submission(&self) -> Option<&SubmissionResult> {
        self.submission.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.submission.is_some() {
            FormMode::Submitted
        } else {
            FormMode::Editing
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // four inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
