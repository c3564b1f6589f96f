fn main() {
    // Validate the embedded kana table at compile time.
    validate_toml(
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
