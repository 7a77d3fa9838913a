//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `demo` - Run the Unit of Work scenario (default)

pub mod args;

pub use args::{Cli, Commands, DemoArgs};
