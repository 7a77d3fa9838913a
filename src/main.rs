//! Unit of Work demo - Application entry point
//!
//! CLI-based entry point that dispatches to the demo command.

use clap::Parser;

use unit_of_work_demo::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    logging,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing (verbose mode sets debug level)
    if let Err(e) = logging::init_tracing(cli.verbose, &config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let mut stdout = std::io::stdout();
    let result = match cli.command.unwrap_or_default() {
        Commands::Demo(args) => commands::demo::execute(args, &mut stdout).map(|_| ()),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
