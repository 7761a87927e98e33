//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Value objects validate themselves on construction; the `User` entity is
//! built only from already-valid value objects.

pub mod constants;
pub mod email;
pub mod error;
pub mod user;
pub mod user_id;
pub mod user_name;

pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserResponse};
pub use user_id::UserId;
pub use user_name::UserName;
