//! Marshaling between C strings and Rust strings.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Copies `s` into a new NUL-terminated buffer from the C allocator.
///
/// The buffer is exactly `s.len() + 1` bytes long. Ownership passes to the
/// caller, who must release it with `free()` or [`release_foreign_buffer`].
///
/// # Returns
///
/// The buffer, or a null pointer if the C allocator fails.
pub fn into_foreign_buffer(s: &str) -> *mut c_char {
    let bytes = s.as_bytes();
    // SAFETY: size is at least 1; the result is checked for null before use
    let buf = unsafe { libc::malloc(bytes.len() + 1) }.cast::<u8>();
    if buf.is_null() {
        log::error!("Failed to allocate {} bytes for a foreign string", bytes.len() + 1);
        return ptr::null_mut();
    }
    // SAFETY: buf is valid for len + 1 bytes and cannot overlap `bytes`
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len());
        buf.add(bytes.len()).write(0);
    }
    buf.cast()
}

/// Releases a buffer returned by [`into_foreign_buffer`]. Null is ignored.
///
/// # Safety
///
/// `buf` must be null or a pointer obtained from the C allocator that has not
/// been freed yet.
pub unsafe fn release_foreign_buffer(buf: *mut c_char) {
    if !buf.is_null() {
        libc::free(buf.cast());
    }
}

/// Reads a NUL-terminated C string into an owned `String`.
///
/// Invalid UTF-8 is replaced with U+FFFD. A null pointer reads as the empty
/// string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn string_from_c_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Reads `len` bytes starting at `ptr` into an owned `String`.
///
/// This is the layout Python callers build for length-prefixed strings: the
/// bytes need not be NUL-terminated, and anything past `len` is ignored.
/// Invalid UTF-8 is replaced with U+FFFD. A null pointer or a non-positive
/// length reads as the empty string.
///
/// # Safety
///
/// If `ptr` is non-null and `len` is positive, `ptr` must be valid for reads
/// of `len` bytes for the duration of the call.
pub unsafe fn string_from_parts(ptr: *const c_char, len: i64) -> String {
    if ptr.is_null() || len <= 0 {
        return String::new();
    }
    let Ok(len) = usize::try_from(len) else {
        return String::new();
    };
    let bytes = std::slice::from_raw_parts(ptr.cast::<u8>(), len);
    String::from_utf8_lossy(bytes).into_owned()
}
