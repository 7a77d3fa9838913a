//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_DEMO_USERS, USER_ARG_SEPARATOR};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Unit of Work demo - Repository and Unit of Work over an in-memory store
#[derive(Parser, Debug)]
#[command(name = "unit-of-work-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add users through a unit of work and save (default)
    Demo(DemoArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Demo(DemoArgs::default())
    }
}

/// Arguments for the demo command
#[derive(Parser, Debug, Default, PartialEq, Eq)]
pub struct DemoArgs {
    /// User to add, as ID or ID:NAME (repeatable)
    #[arg(short, long = "user", value_name = "ID[:NAME]", value_parser = parse_user)]
    pub users: Vec<User>,
}

impl DemoArgs {
    /// Users given on the command line, or the reference pair when none were
    pub fn users_or_default(self) -> Vec<User> {
        if self.users.is_empty() {
            DEFAULT_DEMO_USERS
                .iter()
                .map(|(id, name)| User::new(*id, *name))
                .collect()
        } else {
            self.users
        }
    }
}

/// Parse `ID` or `ID:NAME` into a user
fn parse_user(raw: &str) -> AppResult<User> {
    let (id, name) = match raw.split_once(USER_ARG_SEPARATOR) {
        Some((id, name)) => (id, Some(name)),
        None => (raw, None),
    };

    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::validation(format!("invalid user id '{}': {}", id, e)))?;

    Ok(match name {
        Some(name) if !name.is_empty() => User::new(id, name),
        _ => User::unnamed(id),
    })
}
