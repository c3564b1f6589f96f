#[cfg(feature = "trace")]
use tracing::{debug, debug_span};

use super::table::KanaTable;
#[cfg(feature = "trace")]
use crate::unicode::script_name;

/// Small tsu: doubles the consonant of the following kana.
const SOKUON: char = 'っ';
/// Syllabic n.
const HATSUON: char = 'ん';

/// Byte-order mark. Not `char::is_whitespace`, but stripped like whitespace.
const BOM: char = '\u{FEFF}';

/// Characters removed by the final pass.
pub fn is_stripped(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Whether `ん` followed by `next` needs an apostrophe so that "n'a" is not
/// read back as "na". ASCII y/w are accepted for partially romanized input.
fn needs_apostrophe(next: char) -> bool {
    matches!(
        next,
        'あ' | 'い' | 'う' | 'え' | 'お' | 'や' | 'ゆ' | 'よ' | 'わ' | 'を' | 'ん' | 'y' | 'w'
    )
}

/// Greedy left-to-right hiragana → romaji scanner over a [`KanaTable`].
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'a> {
    table: &'a KanaTable,
}

impl<'a> Transliterator<'a> {
    pub fn new(table: &'a KanaTable) -> Self {
        Self { table }
    }

    /// Transliterate `input` into lowercase romaji.
    ///
    /// Rules are tried in order at each position: sokuon, digraph, single
    /// kana, then pass-through. Characters missing from the table are copied
    /// verbatim. Whitespace is dropped and ASCII letters are lowercased at
    /// the end; other characters keep their case.
    pub fn transliterate(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let chars: Vec<char> = input.chars().collect();
        #[cfg(feature = "trace")]
        let _span = debug_span!("transliterate", char_count = chars.len()).entered();
        #[cfg(feature = "trace")]
        let mut passthrough = 0usize;

        let mut out = String::with_capacity(input.len());
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();

            // Only the っ itself is consumed; the next kana is emitted on the
            // following iteration.
            if ch == SOKUON {
                let initial = next
                    .and_then(|n| self.table.get(n))
                    .and_then(|romaji| romaji.chars().next());
                if let Some(initial) = initial {
                    out.push(initial);
                    i += 1;
                    continue;
                }
            }

            if let Some(romaji) = next.and_then(|n| self.table.get_digraph(ch, n)) {
                out.push_str(romaji);
                i += 2;
                continue;
            }

            if let Some(romaji) = self.table.get(ch) {
                out.push_str(romaji);
                if ch == HATSUON && next.is_some_and(needs_apostrophe) {
                    out.push('\'');
                }
                i += 1;
                continue;
            }

            #[cfg(feature = "trace")]
            {
                debug!(ch = %ch, script = script_name(ch), pos = i, "passthrough");
                passthrough += 1;
            }
            out.push(ch);
            i += 1;
        }

        out.retain(|c| !is_stripped(c));
        out.make_ascii_lowercase();

        #[cfg(feature = "trace")]
        debug!(output_len = out.len(), passthrough);
        out
    }
}

/// Transliterate with the process-wide table.
pub fn transliterate(input: &str) -> String {
    Transliterator::new(KanaTable::global()).transliterate(input)
}

/// Absent input yields an empty string.
pub fn transliterate_opt(input: Option<&str>) -> String {
    input.map(transliterate).unwrap_or_default()
}
