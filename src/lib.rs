// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use kana_core::{romaji, unicode};
pub use romaji::{transliterate, transliterate_opt, KanaTable, Transliterator};
pub use trace_init::{init_tracing, TraceInitError, TRACE_FILE};
