//! User repository port and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Email, User, UserId, UserName};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Storage-agnostic: the services depend on this trait only. Lookups return
/// at most one user; name and email are unique across stored users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or overwrite the stored user with the same id
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Find user by exact name
    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// List every stored user
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Remove the user. Returns `AppError::NotFound` if no such user exists.
    async fn delete(&self, id: &UserId) -> AppResult<()>;

    /// Check whether any user holds this name
    async fn exists_by_name(&self, name: &UserName) -> AppResult<bool>;

    /// Check whether any user holds this email address
    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique index violations become `Conflict`; everything else stays opaque.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::conflict(detail),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: &User) -> AppResult<()> {
        let now = chrono::Utc::now();
        let existing = UserEntity::find_by_id(user.id().as_str())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.name = Set(user.name().as_str().to_string());
                active.email = Set(user.email().as_str().to_string());
                active.updated_at = Set(now);

                active.update(&self.db).await.map_err(map_write_err)?;
            }
            None => {
                let active = ActiveModel {
                    id: Set(user.id().as_str().to_string()),
                    name: Set(user.name().as_str().to_string()),
                    email: Set(user.email().as_str().to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                active.insert(&self.db).await.map_err(map_write_err)?;
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id.as_str())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn exists_by_name(&self, name: &UserName) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Name.eq(name.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }
}
