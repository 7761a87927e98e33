//! Duplication check - enforces name and email uniqueness across users.
//!
//! Creation has no "self" to exclude, so an existence check is enough.
//! Updates must ignore the user's own record, so they fetch the holder of
//! each value and compare identifiers.
//!
//! The check runs before the write and is not atomic with it. Two concurrent
//! registrations of the same name can both pass; the storage layer's unique
//! constraint rejects the second write with `AppError::Conflict`.

use std::sync::Arc;

use tracing::{debug, warn};

use common::AppResult;
use domain::{DomainError, Email, User, UserName};

use crate::repository::UserRepository;

/// Domain service checking users against the rest of the stored collection.
pub struct UserDuplicationChecker {
    repo: Arc<dyn UserRepository>,
}

impl UserDuplicationChecker {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Check both the name and the email of a user that is not stored yet.
    pub async fn check_duplication(&self, user: &User) -> AppResult<()> {
        self.check_name_duplication(user.name()).await?;
        self.check_email_duplication(user.email()).await
    }

    /// Fail with `DuplicateName` if any stored user holds `name`.
    pub async fn check_name_duplication(&self, name: &UserName) -> AppResult<()> {
        debug!(name = %name, "Checking name availability");

        if self.repo.exists_by_name(name).await? {
            warn!(name = %name, "Rejected duplicate user name");
            return Err(DomainError::duplicate_name(name.as_str()).into());
        }

        Ok(())
    }

    /// Fail with `DuplicateEmail` if any stored user holds `email`.
    pub async fn check_email_duplication(&self, email: &Email) -> AppResult<()> {
        debug!(email = %email, "Checking email availability");

        if self.repo.exists_by_email(email).await? {
            warn!(email = %email, "Rejected duplicate email");
            return Err(DomainError::duplicate_email(email.as_str()).into());
        }

        Ok(())
    }

    /// Check an already-mutated user against every *other* stored user.
    ///
    /// A stored match with the same id is the user itself and is ignored.
    pub async fn check_duplication_for_update(&self, user: &User) -> AppResult<()> {
        if let Some(holder) = self.repo.find_by_name(user.name()).await? {
            if holder.id() != user.id() {
                warn!(name = %user.name(), holder = %holder.id(), "Rejected name taken by another user");
                return Err(DomainError::duplicate_name(user.name().as_str()).into());
            }
        }

        if let Some(holder) = self.repo.find_by_email(user.email()).await? {
            if holder.id() != user.id() {
                warn!(email = %user.email(), holder = %holder.id(), "Rejected email taken by another user");
                return Err(DomainError::duplicate_email(user.email().as_str()).into());
            }
        }

        Ok(())
    }
}
