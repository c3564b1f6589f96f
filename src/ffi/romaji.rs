use std::ffi::{c_char, CString};
use std::path::Path;
use std::ptr;

use super::{cptr_to_str, ffi_guard};
use crate::romaji::{transliterate_opt, KanaTable};

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

// --- Transliteration FFI ---

/// Transliterate a NUL-terminated UTF-8 hiragana string to romaji.
///
/// A null pointer or invalid UTF-8 yields an empty string. The result must be
/// released with [`kana_string_free`].
#[no_mangle]
pub extern "C" fn kana_transliterate(input: *const c_char) -> *mut c_char {
    let input = unsafe { cptr_to_str(input) };
    // Input came from a C string, so the output has no interior NUL.
    CString::new(transliterate_opt(input))
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn kana_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

// --- Configuration FFI ---

/// Install a custom kana table. Returns 1 on success, 0 if the TOML is
/// invalid or the table is already in use.
#[no_mangle]
pub extern "C" fn kana_romaji_init_custom(toml: *const c_char) -> u8 {
    ffi_guard!(0;
        str: toml_str = toml,
    );
    match KanaTable::init_custom(toml_str.to_string()) {
        Ok(()) => 1,
        Err(e) => {
            tracing::warn!("custom kana table rejected: {e}");
            0
        }
    }
}

/// Start writing trace output under `log_dir`. Returns 1 on success, 0 if
/// tracing is compiled out, already installed, or the directory is unusable.
#[no_mangle]
pub extern "C" fn kana_init_tracing(log_dir: *const c_char) -> u8 {
    ffi_guard!(0;
        str: dir = log_dir,
    );
    crate::init_tracing(Path::new(dir)).is_ok() as u8
}
