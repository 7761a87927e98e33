//! User service - Handles user-related use cases.
//!
//! Each use case is a straight pipeline: build value objects, check
//! uniqueness, mutate or create the entity, then write once through the
//! repository. A failure at any step leaves storage untouched.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppResult, OptionExt};
use domain::{Email, User, UserId, UserName};

use crate::repository::UserRepository;
use crate::service::UserDuplicationChecker;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user and return its generated id
    async fn register_user(&self, name: &str, email: &str) -> AppResult<UserId>;

    /// Change name and/or email. `None` leaves the field as it is.
    async fn update_user(&self, id: &str, name: Option<&str>, email: Option<&str>)
        -> AppResult<()>;

    /// Get user by ID, `None` if no such user exists
    async fn get_user(&self, id: &str) -> AppResult<Option<User>>;

    /// List all users
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    /// Delete user by ID
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    duplication: UserDuplicationChecker,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        let duplication = UserDuplicationChecker::new(repo.clone());
        Self { repo, duplication }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register_user(&self, name: &str, email: &str) -> AppResult<UserId> {
        let name = UserName::new(name)?;
        let email = Email::new(email)?;

        self.duplication.check_name_duplication(&name).await?;
        self.duplication.check_email_duplication(&email).await?;

        let user = User::create(name, email);
        self.repo.save(&user).await?;

        info!(user_id = %user.id(), name = %user.name(), "User registered");
        Ok(user.id().clone())
    }

    async fn update_user(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<()> {
        let id = UserId::new(id)?;
        let mut user = self.repo.find_by_id(&id).await?.ok_or_not_found()?;

        // Only values that differ from the current ones are rebuilt.
        if let Some(name) = name {
            if name != user.name().as_str() {
                user.change_name(UserName::new(name)?);
            }
        }
        if let Some(email) = email {
            if email != user.email().as_str() {
                user.change_email(Email::new(email)?);
            }
        }

        self.duplication.check_duplication_for_update(&user).await?;
        self.repo.save(&user).await?;

        info!(user_id = %user.id(), "User updated");
        Ok(())
    }

    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        let id = UserId::new(id)?;
        self.repo.find_by_id(&id).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = UserId::new(id)?;
        self.repo.find_by_id(&id).await?.ok_or_not_found()?;

        self.repo.delete(&id).await?;

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
