use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be one or two characters: {0:?}")]
    InvalidKeyLength(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("whitespace in value for key: {0}")]
    WhitespaceInValue(String),
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
///
/// Keys are a single kana or a two-kana digraph, counted in `char`s.
/// Values must be non-empty and carry no whitespace, since whitespace is
/// stripped from the transliterated output anyway.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !matches!(key.chars().count(), 1 | 2) {
            return Err(RomajiConfigError::InvalidKeyLength(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
        if value.chars().any(super::is_stripped) {
            return Err(RomajiConfigError::WhitespaceInValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
