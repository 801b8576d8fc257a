//! Configuration constants.
//!
//! This module defines the fixed values shared by the resolver wrapper and the
//! C exports.

/// Text returned in place of a canonical name when the lookup fails for any reason.
pub const CNAME_NOT_FOUND: &str = "Could not find CNAME";

/// Amount added by `increment` / `ReturnInt`.
pub const INCREMENT_STEP: i64 = 3;

// Environment variables read by `Config::from_env`
/// Log level for output produced inside a foreign host process
/// (`error`, `warn`, `info`, `debug` or `trace`).
pub const ENV_LOG_LEVEL: &str = "CNAME_EXPORT_LOG_LEVEL";
/// Log format for output produced inside a foreign host process (`plain` or `json`).
pub const ENV_LOG_FORMAT: &str = "CNAME_EXPORT_LOG_FORMAT";

/// Worker threads in the runtime that drives blocking lookups.
/// One is enough: callers block on their own lookup and the worker only
/// services resolver background tasks.
pub const LOOKUP_WORKER_THREADS: usize = 1;
