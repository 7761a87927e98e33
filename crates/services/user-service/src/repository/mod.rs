//! Repository layer for data access.

pub mod entities;
mod memory_repository;
mod user_repository;

pub use memory_repository::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
