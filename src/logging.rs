//! Tracing subscriber setup.
//!
//! The "added" and "saved" confirmations are part of the console output,
//! so their target is always enabled at `info` whatever `RUST_LOG` says.

use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{Config, CONSOLE_LOG_TARGET, VERBOSE_LOG_FILTER};
use crate::errors::{AppError, AppResult};

/// Build the filter from config, verbose flag and the console floor
pub fn env_filter(verbose: bool, config: &Config) -> AppResult<EnvFilter> {
    let filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        config.log_filter.as_str()
    };

    let console: Directive = format!("{}=info", CONSOLE_LOG_TARGET)
        .parse()
        .map_err(|e| AppError::internal(format!("invalid console log directive: {}", e)))?;

    Ok(EnvFilter::new(filter).add_directive(console))
}

/// Initialize tracing subscriber
pub fn init_tracing(verbose: bool, config: &Config) -> AppResult<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter(verbose, config)?)
        .init();
    Ok(())
}
