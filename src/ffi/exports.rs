//! Exported entry points.
//!
//! Names and signatures follow the C header in `include/cname_export.h`.
//! No panic is allowed to unwind across these functions.

#![allow(non_snake_case)]

use std::os::raw::c_char;
use std::panic;

use super::marshal::{into_foreign_buffer, release_foreign_buffer, string_from_c_str, string_from_parts};
use crate::config::CNAME_NOT_FOUND;
use crate::dns::resolve_canonical_name;
use crate::initialization::ensure_logger;
use crate::numeric::increment;

/// Resolves the canonical name of `hostname`.
///
/// Returns a `malloc`-allocated, NUL-terminated string holding either the
/// canonical name or `"Could not find CNAME"`. The caller owns the buffer and
/// must release it with `free()` or `FreeString`. Returns null only if the
/// allocation itself fails.
///
/// A null `hostname` is looked up as the empty name.
///
/// # Safety
///
/// `hostname` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ReturnString(hostname: *const c_char) -> *mut c_char {
    ensure_logger();
    let host = string_from_c_str(hostname);
    export_canonical_name(&host)
}

/// Same as `ReturnString`, for callers that pass a pointer and a byte length
/// instead of a NUL-terminated string (the `{ char *p; int64 n; }` layout).
///
/// # Safety
///
/// If `hostname` is non-null and `len` is positive, `hostname` must be valid
/// for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn ReturnStringN(hostname: *const c_char, len: i64) -> *mut c_char {
    ensure_logger();
    let host = string_from_parts(hostname, len);
    export_canonical_name(&host)
}

/// Returns `value + 3`.
#[no_mangle]
pub extern "C" fn ReturnInt(value: i64) -> i64 {
    increment(value)
}

/// Releases a string returned by `ReturnString` or `ReturnStringN`.
///
/// Equivalent to calling `free()`; provided for callers that cannot reach the
/// C library directly. Null is ignored.
///
/// # Safety
///
/// `buf` must be null or a string returned by this library that has not been
/// released yet.
#[no_mangle]
pub unsafe extern "C" fn FreeString(buf: *mut c_char) {
    release_foreign_buffer(buf);
}

fn export_canonical_name(host: &str) -> *mut c_char {
    let cname = panic::catch_unwind(|| resolve_canonical_name(host)).unwrap_or_else(|_| {
        log::error!("CNAME lookup for {host} panicked");
        CNAME_NOT_FOUND.to_string()
    });
    log::debug!(
        "Returning {:?} for {host} ({} bytes + NUL)",
        cname,
        cname.len()
    );
    into_foreign_buffer(&cname)
}
