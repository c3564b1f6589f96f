//! FFI layer – the C API over the transliterator.
//!
//! Pointer helpers and the argument-guard macro shared by the sub-modules
//! live here.

use std::ffi::{c_char, CStr};

pub mod romaji;


pub use romaji::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Validate one or more C string arguments and bind them as `&str`,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// ```ignore
/// ffi_guard!(0;
///     str: toml = toml_ptr,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;
