//! Form field value objects

/// The four inputs of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Key used in validation messages and config files
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible input label; a trailing `*` marks a required field
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Label used for the field in the submission summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Message)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Test id of the inline error node for this field
    pub fn error_test_id(&self) -> String {
        format!("{}Error", self.key())
    }

    /// Test id of the summary node for this field
    pub fn display_test_id(&self) -> String {
        format!("{}Display", self.key().to_lowercase())
    }

    /// Parse a field from its key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }
}

/// Represents a single text input with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: Field,
    pub value: String,
}

impl FormField {
    /// Create an empty input for a field
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.field.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(Field::FirstName.key(), "firstName");
        assert_eq!(Field::LastName.label(), "Last Name*");
        assert_eq!(Field::Email.label(), "Email*");
        assert_eq!(Field::Message.label(), "Message");
    }

    #[test]
    fn test_only_message_is_optional() {
        let required: Vec<_> = Field::ALL.iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 3);
        assert!(!Field::Message.is_required());
    }

    #[test]
    fn test_test_ids() {
        assert_eq!(Field::FirstName.error_test_id(), "firstNameError");
        assert_eq!(Field::FirstName.display_test_id(), "firstnameDisplay");
        assert_eq!(Field::Message.display_test_id(), "messageDisplay");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Field::from_key("email"), Some(Field::Email));
        assert_eq!(Field::from_key("LASTNAME"), Some(Field::LastName));
        assert_eq!(Field::from_key("phone"), None);
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(Field::FirstName);
        for c in "Fido".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "Fido");
        field.pop_char();
        assert_eq!(field.as_text(), "Fid");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new(Field::Email);
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut name = FormField::new(Field::LastName);
        name.push_char('\n');
        assert!(name.is_empty());

        let mut message = FormField::new(Field::Message);
        message.push_char('\n');
        assert_eq!(message.as_text(), "\n");
    }
}
