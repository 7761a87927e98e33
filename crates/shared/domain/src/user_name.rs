//! User name value object.
//!
//! DDD: Value object - immutable, compared by value. Changing a user's name
//! means building a new `UserName` and handing it to the entity.

use std::fmt;

use crate::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// A validated user name between 3 and 20 characters long.
///
/// Length is measured in Unicode code points, so `"日本語"` is a valid
/// three-character name even though it is nine bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and wrap a user name.
    ///
    /// # Errors
    /// Returns a validation error if the name is empty, shorter than
    /// [`MIN_NAME_LENGTH`] or longer than [`MAX_NAME_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("User name is required"));
        }

        let length = value.chars().count();
        if length < MIN_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "User name must be at least {} characters",
                MIN_NAME_LENGTH
            )));
        }
        if length > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "User name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_round_trip() {
        for input in ["abc", "alice", "twenty-chars-exactly"] {
            let name = UserName::new(input).unwrap();
            assert_eq!(name.as_str(), input);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err, DomainError::validation("User name is required"));
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(matches!(UserName::new("ab"), Err(DomainError::Validation(_))));
        assert!(matches!(UserName::new("a"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_too_long_rejected() {
        let input = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(UserName::new(input), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(UserName::new("a".repeat(MIN_NAME_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_length_counts_code_points() {
        // 3 code points, 9 bytes
        assert!(UserName::new("日本語").is_ok());
        // 21 code points
        assert!(UserName::new("é".repeat(21)).is_err());
        // 2 code points, 8 bytes
        assert!(UserName::new("🦀🦀").is_err());
    }

    #[test]
    fn test_equality_by_value() {
        let a = UserName::new("alice").unwrap();
        let b = UserName::try_from("alice").unwrap();
        let c = UserName::try_from("alicia".to_string()).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
