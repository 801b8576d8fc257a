//! Error types and lookup failure categorization.
//!
//! This module provides:
//! - Error type definitions for initialization and lookups
//! - Categorization of resolver failures into `ErrorType`
//!
//! None of these errors cross the C boundary. Callers of the exports only ever
//! see the canonical name or the fallback text; the categories exist so that
//! failures can be logged with a useful label.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{
    categorize_dns_error_message, categorize_resolve_error, categorize_response_code,
};
pub use types::{ErrorType, InitializationError, LookupError};
