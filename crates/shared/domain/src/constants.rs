//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Name
// =============================================================================

/// Minimum user name length, in Unicode code points
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum user name length, in Unicode code points
pub const MAX_NAME_LENGTH: usize = 20;

// =============================================================================
// Email
// =============================================================================

/// `local-part@domain` with no whitespace or extra `@`, and a dot in the domain
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Maximum email length, in Unicode code points
pub const MAX_EMAIL_LENGTH: usize = 255;

// =============================================================================
// Identifier
// =============================================================================

/// Length of a generated identifier in its hyphenated form
pub const GENERATED_ID_LENGTH: usize = 36;
