//! Infrastructure layer - Storage concerns
//!
//! This module holds the repositories and the Unit of Work that
//! coordinates them.

pub mod repositories;
pub mod unit_of_work;

pub use repositories::{InMemoryUserStore, UserRepository};
pub use unit_of_work::{InMemoryUnitOfWork, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
