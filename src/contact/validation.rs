use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Whitespace as browsers define it for `String.prototype.trim` and `\s`.
/// Unlike Unicode `White_Space` it includes U+FEFF and excludes U+0085.
const FORM_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", FORM_WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Trims the way the page's own scripts would.
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// The three contact form fields, as read from the page at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Reasons the form is rejected before anything is sent.
/// The `Display` text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl FormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks fields in order name, email, email format, message and
    /// reports only the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = trim_form_value(&self.email);

        if trim_form_value(&self.name).is_empty() {
            return Err(ValidationError::MissingName);
        }
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if trim_form_value(&self.message).is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Multipart field names paired with their values.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

/// Advisory check run when the email field loses focus. An empty field is
/// left alone; the submit-time validation reports it.
pub fn email_hint(value: &str) -> Option<ValidationError> {
    let value = trim_form_value(value);
    if !value.is_empty() && !is_valid_email(value) {
        Some(ValidationError::InvalidEmail)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_fields_in_priority_order() {
        assert_eq!(FormInput::new("", "", "").validate(), Err(ValidationError::MissingName));
        assert_eq!(FormInput::new("  ", "bad", "").validate(), Err(ValidationError::MissingName));
        assert_eq!(FormInput::new("Jo", " \t", "").validate(), Err(ValidationError::MissingEmail));
        assert_eq!(FormInput::new("Jo", "bad", "").validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(FormInput::new("Jo", "jo@x.com", "\n ").validate(), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn accepts_complete_input() {
        assert_eq!(FormInput::new("Jo", "jo@x.com", "Hi").validate(), Ok(()));
        assert_eq!(FormInput::new(" Jo ", "  jo@x.com  ", " Hi ").validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "bad-email",
            "jo@x",
            "@x.com",
            "jo@.com",
            "jo@x.",
            "jo x@y.com",
            "jo@@x.com",
            "jo@x@y.com",
            "jo@x .com",
        ] {
            assert_eq!(
                FormInput::new("x", email, "x").validate(),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_dotted_addresses() {
        assert!(is_valid_email("jo@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a+b@c.d"));
    }

    #[test]
    fn messages_match_page_copy() {
        assert_eq!(ValidationError::MissingName.to_string(), "Please enter your name.");
        assert_eq!(ValidationError::MissingEmail.to_string(), "Please enter your email address.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
        assert_eq!(ValidationError::MissingMessage.to_string(), "Please enter a message.");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(
            FormInput::new("\u{FEFF}", "jo@x.com", "Hi").validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            FormInput::new("x", "j\u{FEFF}o@x.com", "x").validate(),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            FormInput::new("Jo", "\u{FEFF}jo@x.com\u{FEFF}", "\u{FEFF}Hi").validate(),
            Ok(())
        );
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(FormInput::new("\u{85}", "jo@x.com", "Hi").validate(), Ok(()));
        assert!(is_valid_email("j\u{85}o@x.com"));
    }

    #[test]
    fn trims_browser_whitespace_only() {
        assert_eq!(trim_form_value("\u{A0}\u{3000} Jo\u{2028}\t"), "Jo");
        assert_eq!(trim_form_value("\u{85}Jo"), "\u{85}Jo");
        assert!(FormInput::new("x", "jo@x\u{A0}y.com", "x").validate().is_err());
    }

    #[test]
    fn email_hint_ignores_empty_and_valid_values() {
        assert_eq!(email_hint(""), None);
        assert_eq!(email_hint("   "), None);
        assert_eq!(email_hint(" jo@x.com "), None);
        assert_eq!(email_hint("jo@"), Some(ValidationError::InvalidEmail));
    }
}
