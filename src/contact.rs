use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::{Regex, RegexBuilder};
use thiserror::Error;

pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Per-field validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Re-checks one field after an edit, clearing or replacing its entry.
    pub fn recheck(&mut self, form: &ContactForm, field: Field) {
        match form.validate_field(field) {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e);
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs = self.0.values().map(|e| e.to_string()).collect::<Vec<_>>();
        f.write_str(&msgs.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate_field(&self, field: Field) -> Result<(), FieldError> {
        let value = self.value(field);
        if value.trim().is_empty() {
            return Err(FieldError::Required(field));
        }
        if field == Field::Email && !EMAIL_RE.is_match(value.trim()) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = Field::ALL
            .into_iter()
            .filter_map(|f| self.validate_field(f).err().map(|e| (f, e)))
            .collect::<BTreeMap<_, _>>();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Placeholder submission: there is no mail backend, the message is only logged.
/// Returns the confirmation to show the visitor.
pub fn submit(form: &ContactForm) -> Result<&'static str, ValidationErrors> {
    form.validate()?;
    log::info!("contact form submitted: {form:?}");
    Ok(THANK_YOU)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project Discussion".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_form_submits() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(submit(&filled()), Ok(THANK_YOU));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(&FieldError::Required(field)));
        }
        assert_eq!(
            errors.get(Field::Name).unwrap().to_string(),
            "Name is required"
        );
        assert!(submit(&ContactForm::default()).is_err());
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let form = ContactForm {
            subject: "   ".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Subject),
            Some(&FieldError::Required(Field::Subject))
        );
    }

    #[test]
    fn test_email_pattern() {
        for good in ["a@b.co", "First.Last+tag@Example.ORG", "x_y%z@sub.domain.io"] {
            let form = ContactForm {
                email: good.to_string(),
                ..filled()
            };
            assert!(form.validate_field(Field::Email).is_ok(), "{good}");
        }
        for bad in ["plainaddress", "a@b", "a@b.c", "@example.com", "a b@example.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            assert_eq!(
                form.validate_field(Field::Email),
                Err(FieldError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_recheck_clears_fixed_field() {
        let mut form = ContactForm {
            email: "john@".to_string(),
            ..filled()
        };
        let mut errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));

        *form.value_mut(Field::Email) = "john@example.com".to_string();
        errors.recheck(&form, Field::Email);
        assert!(errors.is_empty());

        form.message.clear();
        errors.recheck(&form, Field::Message);
        assert_eq!(
            errors.get(Field::Message),
            Some(&FieldError::Required(Field::Message))
        );
    }

    #[test]
    fn test_errors_display() {
        let form = ContactForm {
            name: String::new(),
            email: "nope".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.to_string(), "Name is required, Invalid email address");
    }
}
