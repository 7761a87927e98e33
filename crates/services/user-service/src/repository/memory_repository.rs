//! In-memory user repository.
//!
//! Keeps users in a `HashMap` behind a `tokio::sync::RwLock`. The name and
//! email uniqueness rule is checked inside the same write lock as the insert,
//! so it behaves like the unique indexes of the SQL schema.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{Email, User, UserId, UserName};

use super::UserRepository;

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    // insertion order, for stable listings
    order: Vec<UserId>,
}

/// In-memory implementation of UserRepository.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: &User) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        for other in inner.users.values().filter(|u| u.id() != user.id()) {
            if other.name() == user.name() {
                return Err(AppError::conflict(format!(
                    "name '{}' is held by user {}",
                    user.name(),
                    other.id()
                )));
            }
            if other.email() == user.email() {
                return Err(AppError::conflict(format!(
                    "email '{}' is held by user {}",
                    user.email(),
                    other.id()
                )));
            }
        }

        if inner.users.insert(user.id().clone(), user.clone()).is_none() {
            inner.order.push(user.id().clone());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn find_by_name(&self, name: &UserName) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.name() == name).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.users.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        if inner.users.remove(id).is_none() {
            return Err(AppError::NotFound);
        }
        inner.order.retain(|existing| existing != id);

        Ok(())
    }

    async fn exists_by_name(&self, name: &UserName) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().any(|u| u.name() == name))
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().any(|u| u.email() == email))
    }
}
