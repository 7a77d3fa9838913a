//! Domain layer - Core entities
//!
//! DDD: Domain layer has NO infrastructure dependencies.
//! Contains the `User` entity managed by the repository.

pub mod user;

pub use user::User;
