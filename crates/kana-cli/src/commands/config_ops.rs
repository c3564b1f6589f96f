use std::fs;

use kana_core::romaji::{default_toml, parse_romaji_toml};

use super::CliError;

pub fn romaji_export() {
    print!("{}", default_toml());
}

/// Validate a kana table file, returning the number of mappings.
pub fn validate_table_file(file: &str) -> Result<usize, CliError> {
    let content = fs::read_to_string(file)?;
    let map = parse_romaji_toml(&content)?;
    Ok(map.len())
}

pub fn romaji_validate(file: &str) {
    let count = die!(validate_table_file(file), "Error validating {file}: {}");
    println!("OK: {count} mappings");
}
