//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging. Output
/// goes to stderr so that it never mixes with a host program's stdout.
///
/// The logger reads from the `RUST_LOG` environment variable. The provided
/// `level` overrides the global and crate-level directives from `RUST_LOG`;
/// directives naming a dependency (e.g. `hickory_resolver=debug`) are kept.
///
/// # Arguments
///
/// * `level` - Minimum log level for this crate and the global default
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # From a C or Python host, the exports read these on first call
/// CNAME_EXPORT_LOG_LEVEL=debug CNAME_EXPORT_LOG_FORMAT=json python invoke.py
///
/// # Per-module filtering via RUST_LOG still applies to dependencies
/// RUST_LOG=hickory_resolver=debug python invoke.py
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = logger_builder(level, format, rust_log.as_deref());

    // try_init: the host process may already have a logger
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the `env_logger` configuration used by [`init_logger_with`].
///
/// `rust_log` is a `RUST_LOG`-style filter spec. It is applied after the
/// dependency defaults and before `level`.
fn logger_builder(level: LevelFilter, format: LogFormat, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    // Truncated or malformed UDP responses are retried by hickory and only add noise
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    if let Some(spec) = rust_log {
        builder.parse_filters(spec);
    }
    builder.filter_level(level);
    builder.filter_module("cname_export", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
