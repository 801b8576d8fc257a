//! CNAME resolution.
//!
//! This module provides:
//! - An async CNAME lookup against a caller-supplied resolver
//! - A blocking wrapper that uses the process-wide lookup context and
//!   collapses every failure into the fixed fallback text
//!
//! Lookups respect the system DNS configuration.

mod resolution;

// Re-export public API
pub use resolution::{lookup_cname, lookup_cname_blocking, resolve_canonical_name};
