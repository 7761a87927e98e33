//! Unified error handling for services and storage adapters.
//!
//! `AppError` is what flows through the repository port and the services.
//! Domain rule violations map onto it one-to-one; storage faults are carried
//! opaquely and only described in general terms to callers.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain rule violations
    #[error("{0}")]
    Validation(String),

    #[error("User name '{0}' is already taken")]
    DuplicateName(String),

    #[error("Email '{0}' is already taken")]
    DuplicateEmail(String),

    #[error("Resource not found")]
    NotFound,

    // Storage-level uniqueness violation reported by an adapter
    #[error("Conflict: {0}")]
    Conflict(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateName(_) => "DUPLICATE_NAME",
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Conflict(detail) => {
                tracing::error!("Storage conflict: {}", detail);
                "The record conflicts with an existing one".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Domain errors are safe to show verbatim
            _ => self.to_string(),
        }
    }

    /// True for errors caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::DuplicateName(_)
                | AppError::DuplicateEmail(_)
                | AppError::NotFound
        )
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::DuplicateName(name) => AppError::DuplicateName(name),
            DomainError::DuplicateEmail(email) => AppError::DuplicateEmail(email),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        AppError::Conflict(detail.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_one_to_one() {
        let err: AppError = DomainError::validation("User name is required").into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "User name is required"));

        let err: AppError = DomainError::duplicate_name("alice").into();
        assert!(matches!(err, AppError::DuplicateName(ref n) if n == "alice"));

        let err: AppError = DomainError::duplicate_email("a@x.com").into();
        assert!(matches!(err, AppError::DuplicateEmail(ref e) if e == "a@x.com"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::DuplicateName("a".into()).code(), "DUPLICATE_NAME");
        assert_eq!(AppError::DuplicateEmail("a".into()).code(), "DUPLICATE_EMAIL");
        assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
        assert_eq!(AppError::conflict("users.name").code(), "CONFLICT");
        assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        let msg = AppError::internal("row 42 has a corrupt email").user_message();
        assert!(!msg.contains("row 42"));

        let msg = AppError::conflict("UNIQUE constraint failed: users.name").user_message();
        assert!(!msg.contains("users.name"));
    }

    #[test]
    fn test_user_message_shows_domain_errors() {
        assert_eq!(
            AppError::DuplicateName("alice".into()).user_message(),
            "User name 'alice' is already taken"
        );
        assert_eq!(AppError::validation("Email is required").user_message(), "Email is required");
    }

    #[test]
    fn test_option_ext() {
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(1).ok_or_not_found().unwrap(), 1);
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::NotFound.is_client_error());
        assert!(AppError::DuplicateEmail("a@x.com".into()).is_client_error());
        assert!(!AppError::conflict("x").is_client_error());
        assert!(!AppError::internal("x").is_client_error());
    }
}
