use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use kana_core::romaji::{is_stripped, KanaTable, Transliterator};

use super::CliError;

/// One converted line, as written in JSON output.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvertRecord {
    pub input: String,
    pub romaji: String,
}

/// Load a custom table from `path`, or fall back to the global table.
pub fn load_table(path: Option<&str>) -> Result<Cow<'static, KanaTable>, CliError> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            let table = KanaTable::from_toml(&content)?;
            debug!(path = p, mappings = table.len(), "loaded custom table");
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(KanaTable::global())),
    }
}

pub fn convert_line(t: &Transliterator<'_>, line: &str) -> ConvertRecord {
    ConvertRecord {
        input: line.to_string(),
        romaji: t.transliterate(line),
    }
}

fn write_record<W: Write>(
    writer: &mut W,
    record: &ConvertRecord,
    json: bool,
) -> Result<(), CliError> {
    if json {
        writeln!(writer, "{}", serde_json::to_string(record)?)?;
    } else {
        writeln!(writer, "{}", record.romaji)?;
    }
    Ok(())
}

/// Convert every line of `reader`, one output line per input line.
pub fn convert_lines<R: BufRead, W: Write>(
    t: &Transliterator<'_>,
    reader: R,
    writer: &mut W,
    json: bool,
) -> Result<usize, CliError> {
    let mut count = 0;
    for line in reader.lines() {
        let record = convert_line(t, &line?);
        write_record(writer, &record, json)?;
        count += 1;
    }
    Ok(count)
}

/// Convert a line file into JSONL, skipping blank lines and `#` comments.
/// Lines are trimmed of whitespace and byte-order marks first.
pub fn batch_file(
    t: &Transliterator<'_>,
    input_file: &Path,
    output_file: &Path,
) -> Result<usize, CliError> {
    let reader = BufReader::new(fs::File::open(input_file)?);
    let mut writer = BufWriter::new(fs::File::create(output_file)?);

    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_matches(is_stripped);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        write_record(&mut writer, &convert_line(t, line), true)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

pub fn convert_cmd(texts: &[String], table: Option<&str>, json: bool) {
    let table = die!(load_table(table), "Error loading table: {}");
    let t = Transliterator::new(&table);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if texts.is_empty() {
        die!(
            convert_lines(&t, io::stdin().lock(), &mut out, json),
            "Error converting stdin: {}"
        );
    } else {
        for text in texts {
            die!(
                write_record(&mut out, &convert_line(&t, text), json),
                "Error writing output: {}"
            );
        }
    }
}

pub fn batch_cmd(input_file: &str, output_file: &str, table: Option<&str>) {
    let table = die!(load_table(table), "Error loading table: {}");
    let t = Transliterator::new(&table);
    let count = die!(
        batch_file(&t, Path::new(input_file), Path::new(output_file)),
        "Error converting {input_file}: {}"
    );
    eprintln!("Converted {count} lines -> {output_file}");
}
