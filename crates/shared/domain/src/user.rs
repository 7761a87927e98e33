//! User domain entity and related types.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::email::Email;
use crate::user_id::UserId;
use crate::user_name::UserName;

/// User domain entity.
///
/// Identity is the [`UserId`] alone: two `User` values with the same id are
/// the same user even if their name or email differ in memory. The id never
/// changes; name and email are replaced wholesale through
/// [`User::change_name`] and [`User::change_email`].
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
}

impl User {
    /// Create a new, not yet persisted user with a freshly generated id.
    pub fn create(name: UserName, email: Email) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email,
        }
    }

    /// Rebuild a user from known parts, e.g. a stored row.
    pub fn restore(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Replace the user's name. Persisting the change is the caller's job.
    pub fn change_name(&mut self, name: UserName) {
        self.name = name;
    }

    /// Replace the user's email. Persisting the change is the caller's job.
    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: String,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name.into_inner(),
            email: user.email.into_inner(),
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn name(s: &str) -> UserName {
        UserName::new(s).unwrap()
    }

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let a = User::create(name("alice"), email("alice@x.com"));
        let b = User::create(name("alice"), email("alice@x.com"));

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_restore_keeps_id() {
        let id = UserId::new("fixed-id").unwrap();
        let user = User::restore(id.clone(), name("alice"), email("alice@x.com"));

        assert_eq!(user.id(), &id);
        assert_eq!(user.name().as_str(), "alice");
        assert_eq!(user.email().as_str(), "alice@x.com");
    }

    #[test]
    fn test_equality_uses_id_only() {
        let id = UserId::new("same-id").unwrap();
        let a = User::restore(id.clone(), name("alice"), email("alice@x.com"));
        let b = User::restore(id, name("bob"), email("bob@y.com"));

        assert_eq!(a, b);

        let set: HashSet<User> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_change_name_and_email_keep_identity() {
        let mut user = User::create(name("alice"), email("alice@x.com"));
        let before = user.clone();

        user.change_name(name("alicia"));
        user.change_email(email("alicia@x.com"));

        assert_eq!(user, before);
        assert_eq!(user.id(), before.id());
        assert_eq!(user.name().as_str(), "alicia");
        assert_eq!(user.email().as_str(), "alicia@x.com");
        // the clone still holds the old values
        assert_eq!(before.name().as_str(), "alice");
    }

    #[test]
    fn test_user_response_serializes() {
        let user = User::restore(
            UserId::new("id-1").unwrap(),
            name("alice"),
            email("alice@x.com"),
        );
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "id-1", "name": "alice", "email": "alice@x.com" })
        );
    }
}
