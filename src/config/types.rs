//! Configuration types.
//!
//! This module defines the logging enums and the `Config` struct. There is no
//! command line: foreign callers configure the library through environment
//! variables, Rust callers can build a `Config` directly.

use strum_macros::{Display, EnumString};

use crate::config::constants::{ENV_LOG_FORMAT, ENV_LOG_LEVEL};

/// Logging level for the library.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use cname_export::{Config, LogLevel};
///
/// let config = Config {
///     log_level: LogLevel::Debug,
///     ..Default::default()
/// };
/// assert_eq!(config.log_level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // A library loaded into someone else's process stays quiet unless asked
            log_level: LogLevel::Error,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds a `Config` from `CNAME_EXPORT_LOG_LEVEL` and `CNAME_EXPORT_LOG_FORMAT`.
    ///
    /// Missing or unrecognised values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a `Config` using `lookup` to read each setting by variable name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup(ENV_LOG_LEVEL)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            log_format: lookup(ENV_LOG_FORMAT)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }
}
