//! Pointer/length exports for a wasm32 host.
//!
//! Results are written into a leaked buffer whose address is returned and whose
//! length is read back with `last_len`. On failure the return value is 0 and
//! `last_err_*` describe the error. The host frees both buffers with `dealloc`.
//! Input decoding and the error codes themselves live in [`crate::abi`].

use crate::abi::{decode_input, read_error_message};

static mut LAST_LEN: u32 = 0;
static mut LAST_ERR_PTR: u32 = 0;
static mut LAST_ERR_LEN: u32 = 0;
static mut LAST_ERR_CODE: u32 = 0;

#[no_mangle]
pub extern "C" fn last_len() -> u32 {
    unsafe { LAST_LEN }
}

#[no_mangle]
pub extern "C" fn last_err_ptr() -> u32 {
    unsafe { LAST_ERR_PTR }
}

#[no_mangle]
pub extern "C" fn last_err_len() -> u32 {
    unsafe { LAST_ERR_LEN }
}

#[no_mangle]
pub extern "C" fn last_err_code() -> u32 {
    unsafe { LAST_ERR_CODE }
}

#[no_mangle]
pub extern "C" fn clear_last_error() {
    unsafe {
        LAST_ERR_PTR = 0;
        LAST_ERR_LEN = 0;
        LAST_ERR_CODE = 0;
    }
}

#[no_mangle]
pub extern "C" fn alloc(size: u32) -> u32 {
    let mut buf = Vec::<u8>::with_capacity(size as usize);
    let ptr = buf.as_mut_ptr() as u32;
    std::mem::forget(buf);
    ptr
}

#[no_mangle]
pub extern "C" fn dealloc(ptr: u32, size: u32) {
    if ptr == 0 || size == 0 {
        return;
    }
    unsafe {
        let _ = Vec::<u8>::from_raw_parts(ptr as *mut u8, size as usize, size as usize);
    }
}

pub fn set_error(code: u32, message: &str) {
    unsafe {
        LAST_ERR_CODE = code;
        LAST_LEN = 0;
        let mut out = message.as_bytes().to_vec();
        out.shrink_to_fit();
        LAST_ERR_LEN = out.len() as u32;
        LAST_ERR_PTR = out.as_mut_ptr() as u32;
        std::mem::forget(out);
    }
}

/// Zero length is an empty string, not an error: empty Markdown converts to an
/// empty payload. The host memory is only touched for a non-null, non-empty
/// buffer.
pub fn read_utf8(ptr: u32, len: u32) -> Result<&'static str, u32> {
    let bytes: &'static [u8] = if ptr != 0 && len != 0 {
        unsafe { std::slice::from_raw_parts(ptr as *const u8, len as usize) }
    } else {
        &[]
    };
    decode_input(ptr, len, bytes)
}

pub fn write_out(text: &str) -> u32 {
    unsafe {
        LAST_ERR_CODE = 0;
        LAST_ERR_PTR = 0;
        LAST_ERR_LEN = 0;
    }
    let mut out = text.as_bytes().to_vec();
    out.shrink_to_fit();
    unsafe {
        LAST_LEN = out.len() as u32;
    }
    let out_ptr = out.as_mut_ptr() as u32;
    std::mem::forget(out);
    out_ptr
}

pub fn report_read_error(code: u32, what: &str) -> u32 {
    set_error(code, &read_error_message(code, what));
    0
}
