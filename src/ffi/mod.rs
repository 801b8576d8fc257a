//! C ABI exports.
//!
//! This is the only module that deals in raw pointers. It provides:
//! - The exported entry points (`ReturnString`, `ReturnStringN`, `ReturnInt`, `FreeString`)
//! - Marshaling between C strings and Rust strings
//!
//! Strings handed to foreign callers are always copied into buffers from the C
//! allocator, never into Rust-owned storage, so the caller can release them
//! with `free()`.

mod exports;
mod marshal;

// Re-export public API
pub use exports::{FreeString, ReturnInt, ReturnString, ReturnStringN};
pub use marshal::{into_foreign_buffer, release_foreign_buffer, string_from_c_str, string_from_parts};
