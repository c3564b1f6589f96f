//! Hiragana-to-romaji transliteration.
//!
//! A fixed kana table (loaded from TOML) drives a single greedy scan that
//! handles sokuon (っ), hatsuon (ん) and yōon digraphs (きゃ).

mod config;
mod table;
mod transliterate;


pub use config::{parse_romaji_toml, RomajiConfigError};
pub use table::KanaTable;
pub use transliterate::{is_stripped, transliterate, transliterate_opt, Transliterator};

/// Returns the embedded default romaji table TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
