//! Error codes and input decoding for the pointer/length boundary.
//!
//! Kept free of raw pointers so the same rules hold on every target; the wasm
//! exports in `ffi` only add the memory handling around them.

use crate::error::Error;

pub const ERR_NULL_POINTER: u32 = 1;
pub const ERR_NOT_UTF8: u32 = 2;
/// Style JSON that does not decode, or decodes to out-of-range values.
pub const ERR_BAD_STYLES: u32 = 3;
pub const ERR_OTHER: u32 = 4;

/// Zero length is an empty string whatever the pointer; a null pointer with a
/// non-zero length is refused before any bytes are looked at.
pub fn decode_input(ptr: u32, len: u32, bytes: &[u8]) -> Result<&str, u32> {
    if len == 0 {
        return Ok("");
    }
    if ptr == 0 {
        return Err(ERR_NULL_POINTER);
    }
    std::str::from_utf8(bytes).map_err(|_| ERR_NOT_UTF8)
}

pub fn error_code(err: &Error) -> u32 {
    match err {
        Error::Json(_) | Error::Config(_) => ERR_BAD_STYLES,
        Error::Clipboard(_) => ERR_OTHER,
    }
}

/// Message stored next to a failed read of the argument named `what`.
pub fn read_error_message(code: u32, what: &str) -> String {
    match code {
        ERR_NULL_POINTER => format!("{what}: null pointer"),
        ERR_NOT_UTF8 => format!("{what} is not valid UTF-8"),
        _ => format!("{what}: unreadable input"),
    }
}
