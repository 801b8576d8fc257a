//! Error type definitions.
//!
//! This module defines the error types used throughout the library.

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_resolve_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the runtime that drives blocking lookups.
    #[error("Runtime initialization error: {0}")]
    RuntimeError(#[from] std::io::Error),
}

/// Error types for CNAME lookups.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The resolver reported a failure other than "no such record".
    #[error("DNS lookup error: {0}")]
    Resolve(#[from] ResolveError),

    /// The process-wide lookup context could not be created.
    #[error("Lookup context unavailable: {0}")]
    ContextUnavailable(String),
}

impl LookupError {
    /// Returns the category of this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::Resolve(e) => categorize_resolve_error(e),
            LookupError::ContextUnavailable(_) => ErrorType::ContextUnavailable,
        }
    }
}

/// Categories of CNAME lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The name exists but has no CNAME record
    DnsNoRecords,
    /// The name does not exist
    DnsNxDomain,
    /// The resolver gave up waiting for an answer
    DnsTimeout,
    /// Any other resolver failure (I/O, protocol, no usable name servers)
    DnsLookupError,
    /// The runtime or resolver could not be created
    ContextUnavailable,
}

impl ErrorType {
    /// Returns the string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsNoRecords => "DNS no CNAME record",
            ErrorType::DnsNxDomain => "DNS name does not exist",
            ErrorType::DnsTimeout => "DNS timeout",
            ErrorType::DnsLookupError => "DNS lookup error",
            ErrorType::ContextUnavailable => "Lookup context unavailable",
        }
    }

    /// Whether this category means "there is no CNAME" rather than "the lookup broke".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorType::DnsNoRecords | ErrorType::DnsNxDomain)
    }
}
