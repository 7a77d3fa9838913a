//! Application-wide constants
//!
//! Centralized location for console messages and defaults.

// =============================================================================
// Console Output
// =============================================================================

/// Banner printed before the demo runs, one entry per line
pub const BANNER: [&str; 3] = [
    "=== Unit of Work & Repository Pattern Demo ===",
    "Repository: in-memory user store",
    "Unit of Work: owns the repository and commits changes with save()",
];

/// Closing line printed once the demo completes
pub const DONE_MESSAGE: &str = "Done";

/// Placeholder shown for users without a display name
pub const UNNAMED_USER: &str = "<unnamed>";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Target of the "added" and "saved" console confirmations
pub const CONSOLE_LOG_TARGET: &str = "unit_of_work_demo::console";

// =============================================================================
// Reference Scenario
// =============================================================================

/// Users added by the demo when none are given on the command line
pub const DEFAULT_DEMO_USERS: [(i64, &str); 2] = [(1, "Alice"), (2, "Bob")];

/// Separator between id and name in `--user ID[:NAME]`
pub const USER_ARG_SEPARATOR: char = ':';
