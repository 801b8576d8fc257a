//! Library initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (explicitly, or lazily from the environment for foreign callers)
//! - DNS resolver built from the host's resolver configuration
//! - Process-wide lookup context used by blocking lookups
//!
//! All initialization functions return proper error types for error handling.

mod context;
mod logger;
mod resolver;

use std::sync::Once;

use crate::config::Config;

// Re-export public API
pub use context::{lookup_context, LookupContext};
pub use logger::init_logger_with;
pub use resolver::init_resolver;

static LOGGER_FROM_ENV: Once = Once::new();

/// Initializes the logger from the environment, at most once per process.
///
/// Called by every C export so that a host process gets log output without
/// calling anything besides the exports themselves. If the host (or a Rust
/// caller) already installed a logger, that logger is left in place.
pub fn ensure_logger() {
    LOGGER_FROM_ENV.call_once(|| {
        let config = Config::from_env();
        // An already-installed logger is not an error worth reporting here
        let _ = init_logger_with(config.log_level.into(), config.log_format);
    });
}
