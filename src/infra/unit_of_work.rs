//! Unit of Work pattern implementation.
//!
//! SOLID (SRP): Owns repository access and the commit step.
//!
//! The Unit of Work pattern:
//! - Centralizes access to all repositories
//! - Offers a single `save` that, in a real system, would persist all
//!   pending changes atomically
//!
//! The in-memory implementation has nothing to persist, so `save` only
//! reports that it ran and leaves the repository untouched.

use std::sync::Arc;

use super::repositories::{InMemoryUserStore, UserRepository};
use crate::config::CONSOLE_LOG_TARGET;
use crate::errors::AppResult;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and the commit step.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    ///
    /// Every call hands out the same repository instance.
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Commit pending changes
    ///
    /// `InMemoryUnitOfWork` always returns `Ok`.
    fn save(&self) -> AppResult<()>;
}

/// Concrete implementation of UnitOfWork over in-memory stores
pub struct InMemoryUnitOfWork {
    user_repo: Arc<InMemoryUserStore>,
}

impl InMemoryUnitOfWork {
    /// Create new UnitOfWork instance with its own empty user store
    pub fn new() -> Self {
        Self {
            user_repo: Arc::new(InMemoryUserStore::new()),
        }
    }
}

impl Default for InMemoryUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitOfWork for InMemoryUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn save(&self) -> AppResult<()> {
        let users = self.user_repo.count().unwrap_or_default();
        tracing::info!(target: CONSOLE_LOG_TARGET, users, "Changes saved");
        Ok(())
    }
}
