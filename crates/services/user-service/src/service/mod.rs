//! Service layer - duplication checks and user use cases.

mod duplication_check;
mod user_service;

pub use duplication_check::UserDuplicationChecker;
pub use user_service::{UserManager, UserService};
