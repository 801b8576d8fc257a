//! Library configuration and constants.
//!
//! This module provides:
//! - Configuration constants (fallback text, increment step, environment keys)
//! - Log level and format types
//! - Environment-driven `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
