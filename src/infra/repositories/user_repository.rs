//! User repository backed by an in-memory list.

use std::sync::{PoisonError, RwLock};

use crate::config::CONSOLE_LOG_TARGET;
use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Insertion order is preserved and duplicates are kept; there is
/// no filtering, sorting or deduplication. The in-memory store never
/// returns `Err`; the `Result` leaves room for fallible backends.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Append a user
    fn add(&self, user: User) -> AppResult<()>;

    /// List every user in the order they were added
    fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserRepository holding users in memory
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserStore {
    fn add(&self, user: User) -> AppResult<()> {
        tracing::info!(
            target: CONSOLE_LOG_TARGET,
            user_id = user.id,
            "Added user: {}",
            user.display_name()
        );
        // A push either lands or doesn't, so a poisoned list is still consistent.
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user);
        Ok(())
    }

    /// Returns an owned snapshot; mutating it does not touch the store.
    fn list(&self) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().unwrap_or_else(PoisonError::into_inner).len())
    }
}
