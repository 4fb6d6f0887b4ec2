//! Snapshot of a submit that passed validation

use super::field::Field;
use chrono::{DateTime, Local};

/// Source of the submit timestamp, mockable in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Field values captured at the last successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

impl SubmissionResult {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Non-empty submitted values in field order
    pub fn entries(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .map(|f| (f, self.value(f)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}
