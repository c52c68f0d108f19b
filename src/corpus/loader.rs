// File readers for the corpus and the word lists the pipeline consumes.
//
// Formats:
//   dataset    CSV, first column is `<id>_sep_<text>`
//   dictionary CSV, one lexicon word per record
//   stopwords  plain text, one per line
//   emoticons  plain text, one per line
//   emojis     CSV with a header row and an `emoji` column

use std::fs;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use stop_words::LANGUAGE;

use crate::error::{Error, Result};
use crate::text::stemmer::StemLanguage;

/// Separator between a record's id and its text.
pub const SEPARATOR: &str = "_sep_";

/// Column holding the emoji literal in the emoji table.
pub const EMOJI_COLUMN: &str = "emoji";

/// The text part of a dataset entry: everything after the first separator.
pub fn entry_text(entry: &str) -> Option<&str> {
    entry.split_once(SEPARATOR).map(|(_, text)| text)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn utf8_field<'a>(path: &Path, record: usize, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| Error::TypeMismatch {
        what: format!("{} record {record}", path.display()),
        detail: e.to_string(),
    })
}

/// Read every record's first column, headerless.
fn first_column(path: &Path) -> Result<Vec<(usize, ByteRecord)>> {
    let bytes = read_bytes(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut records = Vec::new();
    for (i, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push((i + 1, record));
    }
    Ok(records)
}

/// Load the post texts from a dataset file.
///
/// Every record must contain the separator; a record without one is
/// malformed and aborts the load.
pub fn load_dataset(path: &Path) -> Result<Vec<String>> {
    let mut posts = Vec::new();
    for (n, record) in first_column(path)? {
        let Some(field) = record.get(0) else {
            continue;
        };
        let entry = utf8_field(path, n, field)?;
        let text = entry_text(entry).ok_or_else(|| Error::MalformedRecord {
            path: path.to_path_buf(),
            record: n,
            reason: format!("no `{SEPARATOR}` separator"),
        })?;
        posts.push(text.to_string());
    }
    Ok(posts)
}

/// Load the reference lexicon, one word per record.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for (n, record) in first_column(path)? {
        if let Some(field) = record.get(0) {
            words.push(utf8_field(path, n, field)?.to_string());
        }
    }
    Ok(words)
}

/// Load a plain-text list, one entry per line. Blank lines are kept; the
/// normalizer ignores empty literals.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = read_bytes(path)?;
    let text = std::str::from_utf8(&bytes).map_err(|e| Error::TypeMismatch {
        what: path.display().to_string(),
        detail: e.to_string(),
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Load the `emoji` column of the emoji table.
pub fn load_emojis(path: &Path) -> Result<Vec<String>> {
    let bytes = read_bytes(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let column = reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .position(|h| h == EMOJI_COLUMN.as_bytes())
        .ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: EMOJI_COLUMN.to_string(),
        })?;

    let mut emojis = Vec::new();
    for (i, record) in reader.byte_records().enumerate() {
        let record = record.map_err(csv_err)?;
        // Header is record 1.
        let n = i + 2;
        let field = record.get(column).ok_or_else(|| Error::MalformedRecord {
            path: path.to_path_buf(),
            record: n,
            reason: format!("no `{EMOJI_COLUMN}` value"),
        })?;
        emojis.push(utf8_field(path, n, field)?.to_string());
    }
    Ok(emojis)
}

/// Bundled stopword list for `language`, used when no stopword file exists.
pub fn bundled_stopwords(language: StemLanguage) -> Vec<String> {
    let language = match language {
        StemLanguage::Spanish => LANGUAGE::Spanish,
        StemLanguage::English => LANGUAGE::English,
        StemLanguage::Portuguese => LANGUAGE::Portuguese,
        StemLanguage::French => LANGUAGE::French,
        StemLanguage::Italian => LANGUAGE::Italian,
    };
    stop_words::get(language)
}
