//! Field rules and the live error map

use super::field::Field;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum number of characters for first and last name
pub const MIN_NAME_LENGTH: usize = 5;

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").unwrap());

/// A failing field rule. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is a required field", .field.key())]
    Required { field: Field },
    #[error("{} must be at least {min} characters", .field.key())]
    TooShort { field: Field, min: usize },
    #[error("{} must be a valid email address", .field.key())]
    InvalidEmail { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::InvalidEmail { field } => *field,
        }
    }
}

/// Check a single field value against its rule.
///
/// Each field has at most one failing rule at a time: required wins over
/// length, and the email shape is only checked on a non-empty value.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return if field.is_required() {
            Err(ValidationError::Required { field })
        } else {
            Ok(())
        };
    }

    match field {
        Field::FirstName | Field::LastName if value.chars().count() < MIN_NAME_LENGTH => {
            Err(ValidationError::TooShort {
                field,
                min: MIN_NAME_LENGTH,
            })
        }
        Field::Email if !EMAIL_REGEX.is_match(value) => {
            Err(ValidationError::InvalidEmail { field })
        }
        _ => Ok(()),
    }
}

/// Currently failing rules, keyed by field.
///
/// A key is present only while its field fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    /// Revalidate one field and update its entry. Returns true if it passes.
    pub fn revalidate(&mut self, field: Field, value: &str) -> bool {
        match validate_field(field, value) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(err) => {
                self.errors.insert(field, err);
                false
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing rules in field order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }
}
