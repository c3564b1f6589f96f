//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F), including the small kana
/// (ゃ, っ) and the voicing marks that have no romaji of their own.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Note that ー and ・ live
/// here even though they appear in hiragana text.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Short script label used in trace output.
pub fn script_name(c: char) -> &'static str {
    if is_hiragana(c) {
        "hiragana"
    } else if is_katakana(c) {
        "katakana"
    } else if is_kanji(c) {
        "kanji"
    } else if is_latin(c) {
        "latin"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('っ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_katakana('・'));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('漢'));
        assert!(is_kanji('𠮷'));
        assert!(!is_kanji('あ'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
    }

    #[test]
    fn test_script_name() {
        assert_eq!(script_name('ゔ'), "hiragana");
        assert_eq!(script_name('カ'), "katakana");
        assert_eq!(script_name('字'), "kanji");
        assert_eq!(script_name('Q'), "latin");
        assert_eq!(script_name('7'), "other");
    }
}
