//! cname_export library: CNAME lookups callable from C and Python
//!
//! This library exposes two functions across a C ABI:
//!
//! - `ReturnString` resolves the canonical name (CNAME) of a hostname using the
//!   host's resolver configuration and returns it in a `malloc`-owned,
//!   NUL-terminated buffer. When no canonical name can be found the buffer holds
//!   the fixed text `"Could not find CNAME"`.
//! - `ReturnInt` returns its argument plus three.
//!
//! Rust callers can use the same functionality without raw pointers:
//!
//! ```no_run
//! use cname_export::{increment, resolve_canonical_name};
//!
//! let cname = resolve_canonical_name("www.github.com");
//! println!("{cname}");
//! assert_eq!(increment(42), 45);
//! ```
//!
//! # Memory ownership
//!
//! Every string returned by the C exports is allocated with the C allocator.
//! The caller owns it and must release it with `free()` (or `FreeString`).
//!
//! # Blocking
//!
//! `resolve_canonical_name` blocks the calling thread for the duration of the
//! lookup. Async callers should use [`dns::lookup_cname`] instead.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod ffi;
pub mod initialization;
mod numeric;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, CNAME_NOT_FOUND};
pub use dns::resolve_canonical_name;
pub use error_handling::{ErrorType, InitializationError, LookupError};
pub use numeric::increment;
