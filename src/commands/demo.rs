//! Demo command - Adds users through a Unit of Work and saves.

use std::io::Write;

use crate::cli::args::DemoArgs;
use crate::config::{BANNER, DONE_MESSAGE};
use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::{InMemoryUnitOfWork, UnitOfWork};

/// Execute the demo command against a fresh in-memory unit of work
pub fn execute(args: DemoArgs, out: &mut dyn Write) -> AppResult<Vec<User>> {
    let uow = InMemoryUnitOfWork::new();
    run(&uow, args.users_or_default(), out)
}

/// Print the banner, add `users` through `uow`, save, and print `Done`.
///
/// Returns the repository contents after the save.
pub fn run(uow: &dyn UnitOfWork, users: Vec<User>, out: &mut dyn Write) -> AppResult<Vec<User>> {
    for line in BANNER {
        writeln!(out, "{}", line)?;
    }

    let repo = uow.users();
    for user in users {
        repo.add(user)?;
    }

    uow.save()?;
    writeln!(out, "{}", DONE_MESSAGE)?;

    repo.list()
}
