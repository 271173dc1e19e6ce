use std::time::Duration;

/// Simulated round trip of a contact form submission. Nothing is sent.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project or opportunity...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns `false` if a submission is already pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Ends the pending submission and clears every field.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_independent() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        assert_eq!(form.get(Field::Name), "Ada");
        assert_eq!(form.get(Field::Email), "ada@example.com");
        assert_eq!(form.get(Field::Subject), "");
        form.set(Field::Name, "Grace");
        assert_eq!(form.get(Field::Name), "Grace");
    }

    #[test]
    fn test_submission_cycle() {
        let mut form = ContactForm::default();
        form.set(Field::Message, "hello");
        assert!(form.begin_submit());
        assert!(form.is_submitting());
        // a second click while pending is ignored
        assert!(!form.begin_submit());
        assert_eq!(form.get(Field::Message), "hello");
        form.finish_submit();
        assert!(!form.is_submitting());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::Email.input_type(), "email");
        assert_eq!(Field::Subject.input_type(), "text");
        assert_eq!(Field::Message.id(), "message");
        assert_eq!(Field::Name.label(), "Name");
    }
}
