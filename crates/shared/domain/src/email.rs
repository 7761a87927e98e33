//! Email value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, MAX_EMAIL_LENGTH};
use crate::error::{DomainError, DomainResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

/// A validated `local-part@domain` email address.
///
/// Neither part may contain whitespace or `@`, and the domain must contain
/// at least one dot. The address is kept exactly as supplied; no case
/// folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an email address.
    ///
    /// # Errors
    /// Returns a validation error if the address is empty, longer than
    /// [`MAX_EMAIL_LENGTH`] characters or malformed.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if value.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email must be at most {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::validation("Email format is invalid"));
        }

        Ok(Self(value))
    }

    /// Part before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn split(&self) -> (&str, &str) {
        // Construction guarantees exactly one '@'.
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for input in ["a@b.c", "user@example.com", "first.last+tag@mail.example.org"] {
            let email = Email::new(input).unwrap();
            assert_eq!(email.as_str(), input);
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for input in [
            "",
            "abc",
            "a@b",
            "@b.c",
            "a@.",
            "a@@b.c",
            "a@b@c.d",
            "a b@c.d",
            "a@b .c",
            "a@b.c ",
            "a@b.",
        ] {
            assert!(
                matches!(Email::new(input), Err(DomainError::Validation(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_limit() {
        // "@x.com" is 6 characters
        let longest = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH - 6));
        assert!(Email::new(longest).is_ok());

        let too_long = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH - 5));
        let err = Email::new(too_long).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation(format!("Email must be at most {} characters", MAX_EMAIL_LENGTH))
        );
    }

    #[test]
    fn test_parts() {
        let email = Email::new("user@example.com").unwrap();

        assert_eq!(email.local_part(), "user");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_equality_by_value() {
        let a = Email::new("user@example.com").unwrap();
        let b = Email::try_from("user@example.com").unwrap();
        let c = Email::try_from("User@example.com").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
