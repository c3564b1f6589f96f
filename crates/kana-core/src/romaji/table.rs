use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// TOML the global table is built from. Claimed by whichever of
/// `init_custom` or `global` runs first.
static TABLE_TOML: OnceLock<Cow<'static, str>> = OnceLock::new();
static INSTANCE: OnceLock<KanaTable> = OnceLock::new();

/// Read-only kana → romaji table.
///
/// Single kana and two-kana digraphs are kept apart so lookups never
/// allocate a key.
#[derive(Debug, Clone)]
pub struct KanaTable {
    singles: HashMap<char, String>,
    digraphs: HashMap<(char, char), String>,
}

impl KanaTable {
    /// Set custom TOML before first `global()` call.
    ///
    /// Fails with `AlreadyInitialized` once `global()` has started, even when
    /// racing it from another thread.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        TABLE_TOML
            .set(Cow::Owned(toml_content))
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        INSTANCE.get_or_init(|| {
            let toml_str = TABLE_TOML.get_or_init(|| Cow::Borrowed(DEFAULT_TOML));
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            Self::from_mappings(&map)
        })
    }

    /// Build a standalone table from TOML text, bypassing the singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        Ok(Self::from_mappings(&map))
    }

    /// Build a standalone table from the embedded default mappings.
    pub fn default_table() -> Self {
        Self::from_toml(DEFAULT_TOML).expect("romaji TOML must be valid")
    }

    /// Keys must already be validated as one or two chars long.
    fn from_mappings(map: &BTreeMap<String, String>) -> Self {
        let mut singles = HashMap::new();
        let mut digraphs = HashMap::new();
        for (kana, romaji) in map {
            let mut chars = kana.chars();
            match (chars.next(), chars.next()) {
                (Some(a), None) => {
                    singles.insert(a, romaji.clone());
                }
                (Some(a), Some(b)) => {
                    digraphs.insert((a, b), romaji.clone());
                }
                _ => {}
            }
        }
        KanaTable { singles, digraphs }
    }

    pub fn get(&self, kana: char) -> Option<&str> {
        self.singles.get(&kana).map(String::as_str)
    }

    pub fn get_digraph(&self, first: char, second: char) -> Option<&str> {
        self.digraphs.get(&(first, second)).map(String::as_str)
    }

    /// Exact-match lookup of a one- or two-char key.
    pub fn lookup(&self, kana: &str) -> Option<&str> {
        let mut chars = kana.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), None, _) => self.get(a),
            (Some(a), Some(b), None) => self.get_digraph(a, b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.singles.len() + self.digraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel() {
        let table = KanaTable::global();
        assert_eq!(table.get('あ'), Some("a"));
        assert_eq!(table.lookup("お"), Some("o"));
    }

    #[test]
    fn test_digraph() {
        let table = KanaTable::global();
        assert_eq!(table.get_digraph('き', 'ゃ'), Some("kya"));
        assert_eq!(table.lookup("しょ"), Some("sho"));
        assert_eq!(table.lookup("じゃ"), Some("ja"));
    }

    #[test]
    fn test_digraph_not_in_singles() {
        let table = KanaTable::global();
        // small ゃ alone is not mapped
        assert_eq!(table.get('ゃ'), None);
        assert_eq!(table.get('っ'), None);
    }

    #[test]
    fn test_symbols() {
        let table = KanaTable::global();
        assert_eq!(table.get('ー'), Some("-"));
        assert_eq!(table.get('・'), Some("・"));
    }

    #[test]
    fn test_lossy_ji_zu() {
        let table = KanaTable::global();
        assert_eq!(table.get('じ'), table.get('ぢ'));
        assert_eq!(table.get('ず'), table.get('づ'));
    }

    #[test]
    fn test_lookup_rejects_other_lengths() {
        let table = KanaTable::global();
        assert_eq!(table.lookup(""), None);
        assert_eq!(table.lookup("きゃあ"), None);
        assert_eq!(table.lookup("a"), None);
    }

    #[test]
    fn test_default_table_size() {
        let table = KanaTable::default_table();
        assert_eq!(table.len(), 108);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let table = KanaTable::global();
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        for (kana, romaji) in &map {
            assert_eq!(
                table.lookup(kana),
                Some(romaji.as_str()),
                "mapping mismatch for kana={kana}"
            );
        }
    }

    #[test]
    fn test_from_toml_is_independent() {
        let table = KanaTable::from_toml("[mappings]\n\"あ\" = \"A\"\n").unwrap();
        assert_eq!(table.get('あ'), Some("A"));
        assert_eq!(table.get('い'), None);
        assert_eq!(KanaTable::global().get('あ'), Some("a"));
    }

    #[test]
    fn test_init_custom_after_global_fails() {
        KanaTable::global();
        let err = KanaTable::init_custom("[mappings]\n\"あ\" = \"x\"\n".to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::AlreadyInitialized));
        assert_eq!(KanaTable::global().get('あ'), Some("a"));
    }

    #[test]
    fn test_global_claims_toml_source() {
        KanaTable::global();
        // No test installs a custom table, so global() claimed the default.
        assert_eq!(TABLE_TOML.get().map(|s| s.as_ref()), Some(DEFAULT_TOML));
        let err = KanaTable::init_custom(DEFAULT_TOML.to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::AlreadyInitialized));
    }

    #[test]
    fn test_init_custom_racing_global_never_lost() {
        // Whichever side wins the slot, a successful init_custom must be
        // what global() serves. The custom TOML here equals the default so
        // other tests are unaffected if it wins.
        let installed = std::thread::scope(|s| {
            s.spawn(|| {
                KanaTable::global();
            });
            s.spawn(|| KanaTable::init_custom(DEFAULT_TOML.to_string()).is_ok())
                .join()
                .unwrap()
        });
        let source = TABLE_TOML.get().unwrap();
        assert_eq!(matches!(source, Cow::Owned(_)), installed);
        assert_eq!(KanaTable::global().get('あ'), Some("a"));
    }

    #[test]
    fn test_init_custom_invalid_is_rejected() {
        let err = KanaTable::init_custom("[mappings]\n".to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }
}
