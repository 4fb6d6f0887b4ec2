//! Render projection of the contact form
//!
//! `FormView` is derived from `ContactForm` after every mutation and is the
//! only thing the UI layer draws. Every error and summary node carries a
//! stable test id so the projection can be queried the way a rendered
//! document would be.

use super::field::Field;
use super::form_state::ContactForm;

pub const HEADING: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";

/// Inline error node under an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    pub test_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub is_active: bool,
    pub is_multiline: bool,
    pub error: Option<ErrorNode>,
}

/// One submitted value in the summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub test_id: String,
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub submitted_at: String,
    pub nodes: Vec<DisplayNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_focused: bool,
    pub summary: Option<SummaryView>,
}

impl FormView {
    pub fn from_form(form: &ContactForm) -> Self {
        let active = form.active_input();

        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                value: form.field(field).as_text().to_string(),
                is_active: active == Some(field),
                is_multiline: field.is_multiline(),
                error: form.error(field).map(|err| ErrorNode {
                    test_id: field.error_test_id(),
                    message: err.to_string(),
                }),
            })
            .collect();

        let summary = form.submission().map(|submission| SummaryView {
            submitted_at: submission.submitted_at.format("%H:%M:%S").to_string(),
            nodes: submission
                .entries()
                .into_iter()
                .map(|(field, text)| DisplayNode {
                    test_id: field.display_test_id(),
                    label: field.summary_label(),
                    text: text.to_string(),
                })
                .collect(),
        });

        Self {
            heading: HEADING,
            fields,
            submit_label: SUBMIT_LABEL,
            submit_focused: form.is_submit_focused(),
            summary,
        }
    }

    /// All visible error nodes
    pub fn error_nodes(&self) -> Vec<&ErrorNode> {
        self.fields.iter().filter_map(|f| f.error.as_ref()).collect()
    }
}

/// Queries mirroring how a rendered document is inspected
#[cfg(test)]
impl FormView {
    /// Error nodes whose test id contains `pattern` (case-insensitive)
    pub fn errors_matching(&self, pattern: &str) -> Vec<&ErrorNode> {
        let pattern = pattern.to_lowercase();
        self.error_nodes()
            .into_iter()
            .filter(|node| node.test_id.to_lowercase().contains(&pattern))
            .collect()
    }

    /// Summary node by exact test id, if the summary is shown and has it
    pub fn display_node(&self, test_id: &str) -> Option<&DisplayNode> {
        self.summary
            .as_ref()?
            .nodes
            .iter()
            .find(|node| node.test_id == test_id)
    }
}
