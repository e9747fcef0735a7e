use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Pattern for syntactically valid email addresses. Accepts a dotted local
/// part or a quoted string, followed by either a bracketed IPv4 literal or a
/// dotted domain with an alphabetic top level of at least two characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,
    #[error("Invalid email")]
    Invalid,
}

/// A syntactically validated email address.
///
/// The inner value is kept secret so it never shows up in logs; expose it
/// deliberately via `as_ref().expose_secret()`.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: Secret<String>) -> Result<Self, EmailError> {
        if raw.expose_secret().is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_PATTERN.is_match(raw.expose_secret()) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}
