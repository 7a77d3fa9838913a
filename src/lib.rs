//! Unit of Work demo - Repository and Unit of Work patterns in miniature
//!
//! A single in-memory user repository, owned by a unit of work that
//! exposes it and offers a `save` step. Nothing is persisted; `save`
//! only reports that it ran.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations (the demo driver)
//! - **config**: Application configuration and constants
//! - **domain**: Core entities
//! - **infra**: Repositories and the Unit of Work
//! - **errors**: Centralized error handling
//! - **logging**: Tracing subscriber setup
//!
//! # CLI Usage
//!
//! ```bash
//! # Run the reference scenario (Alice and Bob)
//! cargo run
//!
//! # Run it with custom users
//! cargo run -- demo --user 7:Carol --user 8
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod logging;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::{InMemoryUnitOfWork, InMemoryUserStore, UnitOfWork, UserRepository};
