//! Tests for the C ABI exports, called the way a C or Python host calls them.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use cname_export::ffi::{FreeString, ReturnInt, ReturnString, ReturnStringN};
use cname_export::CNAME_NOT_FOUND;

const MISSING_HOST: &str = "definitely-does-not-exist-12345.invalid";

/// Copies a returned buffer into a `String` and releases it.
fn take_string(buf: *mut c_char) -> String {
    assert!(!buf.is_null(), "exports must not return null");
    let text = unsafe { CStr::from_ptr(buf) }
        .to_str()
        .expect("exported string should be UTF-8")
        .to_string();
    unsafe { FreeString(buf) };
    text
}

fn return_string(host: &str) -> String {
    let host = CString::new(host).unwrap();
    take_string(unsafe { ReturnString(host.as_ptr()) })
}

#[test]
fn test_return_int_adds_three() {
    assert_eq!(ReturnInt(3), 6);
    assert_eq!(ReturnInt(10), 13);
    assert_eq!(ReturnInt(42), 45);
    assert_eq!(ReturnInt(-3), 0);
}

#[test]
fn test_return_int_never_panics_at_limits() {
    assert_eq!(ReturnInt(i64::MAX), i64::MIN + 2);
    assert_eq!(ReturnInt(i64::MIN), i64::MIN + 3);
}

#[test]
fn test_return_string_missing_host_returns_fallback() {
    assert_eq!(return_string(MISSING_HOST), CNAME_NOT_FOUND);
}

#[test]
fn test_return_string_failure_is_idempotent() {
    let first = return_string(MISSING_HOST);
    let second = return_string(MISSING_HOST);
    assert_eq!(first, CNAME_NOT_FOUND);
    assert_eq!(first, second);
}

#[test]
fn test_return_string_buffer_length_matches_content() {
    let host = CString::new(MISSING_HOST).unwrap();
    let buf = unsafe { ReturnString(host.as_ptr()) };
    assert!(!buf.is_null());
    let bytes = unsafe { CStr::from_ptr(buf) }.to_bytes_with_nul().to_vec();
    unsafe { FreeString(buf) };

    assert_eq!(bytes.len(), CNAME_NOT_FOUND.len() + 1);
    assert_eq!(bytes.last(), Some(&0));
    assert_eq!(&bytes[..bytes.len() - 1], CNAME_NOT_FOUND.as_bytes());
}

#[test]
fn test_return_string_null_hostname() {
    let result = take_string(unsafe { ReturnString(ptr::null()) });
    assert_eq!(result, CNAME_NOT_FOUND);
}

#[test]
fn test_return_string_n_uses_only_given_length() {
    let padded = format!("{MISSING_HOST}GARBAGE");
    let buf = unsafe { ReturnStringN(padded.as_ptr().cast(), MISSING_HOST.len() as i64) };
    assert_eq!(take_string(buf), CNAME_NOT_FOUND);
}

#[test]
fn test_return_string_n_invalid_input() {
    let buf = unsafe { ReturnStringN(ptr::null(), 12) };
    assert_eq!(take_string(buf), CNAME_NOT_FOUND);

    let host = b"example.com";
    let buf = unsafe { ReturnStringN(host.as_ptr().cast(), -1) };
    assert_eq!(take_string(buf), CNAME_NOT_FOUND);
}

#[test]
fn test_buffer_can_be_released_with_libc_free() {
    let host = CString::new(MISSING_HOST).unwrap();
    let buf = unsafe { ReturnString(host.as_ptr()) };
    assert!(!buf.is_null());
    // The foreign side releases with its own allocator
    unsafe { libc::free(buf.cast()) };
}

#[test]
fn test_free_string_null_is_noop() {
    unsafe { FreeString(ptr::null_mut()) };
}

#[test]
fn test_exports_from_multiple_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                assert_eq!(ReturnInt(i), i + 3);
                return_string(MISSING_HOST)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), CNAME_NOT_FOUND);
    }
}
