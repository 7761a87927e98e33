//! User identifier value object.

use std::fmt;

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Opaque, immutable identifier of a [`crate::User`].
///
/// Identifiers compare by their underlying string. Fresh identifiers are
/// random (version 4) UUIDs in the hyphenated `8-4-4-4-12` form; identifiers
/// restored from storage or supplied by a caller are accepted as-is once
/// they pass [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Build an identifier from an existing seed.
    ///
    /// # Errors
    /// Returns a validation error if the seed is empty.
    pub fn new(seed: impl Into<String>) -> DomainResult<Self> {
        let seed = seed.into();

        if seed.is_empty() {
            return Err(DomainError::validation("User id is required"));
        }

        Ok(Self(seed))
    }

    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserId {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENERATED_ID_LENGTH;

    #[test]
    fn test_same_seed_is_equal() {
        let a = UserId::new("user-1").unwrap();
        let b = UserId::new("user-1".to_string()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.as_str(), "user-1");
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = UserId::generate();
        let b = UserId::generate();

        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_id_layout() {
        let id = UserId::generate();
        let s = id.as_str();

        assert_eq!(s.len(), GENERATED_ID_LENGTH);
        let groups: Vec<usize> = s.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        // version nibble
        assert_eq!(s.chars().nth(14), Some('4'));
        // variant nibble is one of 8, 9, a, b
        assert!(matches!(s.chars().nth(19), Some('8' | '9' | 'a' | 'b')));
        assert!(s.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_id_round_trips_through_new() {
        let id = UserId::generate();
        let restored = UserId::new(id.as_str()).unwrap();

        assert_eq!(id, restored);
    }

    #[test]
    fn test_empty_seed_rejected() {
        let result = UserId::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_any_non_empty_seed_accepted() {
        let id = UserId::try_from("unknown id").unwrap();
        assert_eq!(id.as_str(), "unknown id");
        assert!(UserId::try_from(" ").is_ok());
    }
}
