//! File text to records

use vashantor_types::Record;

use crate::tokenizer::{QUOTE, SEPARATOR, tokenize_line};

/// Result of parsing a whole file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    /// Non-blank data lines dropped for having fewer than three fields
    pub skipped: usize,
}

/// Parse file text into records.
///
/// The first line is a header and is always discarded. Blank lines are
/// ignored. Malformed lines never fail the parse, they are only counted.
pub fn parse_records(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in text.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(record) => outcome.records.push(record),
            None => {
                tracing::debug!("Dropping malformed row: {}", line);
                outcome.skipped += 1;
            }
        }
    }

    tracing::debug!(
        "Parsed {} records, skipped {}",
        outcome.records.len(),
        outcome.skipped
    );
    outcome
}

/// Parse one trimmed, non-empty data line
pub fn parse_line(line: &str) -> Option<Record> {
    if let Some(record) = parse_plain(line) {
        return Some(record);
    }

    let fields = tokenize_line(line);
    match fields.as_slice() {
        [standard, dialect, dialect_name, ..] => Some(Record::new(
            standard.trim(),
            dialect.trim(),
            dialect_name.trim(),
        )),
        _ => None,
    }
}

// Exactly two separators and no quotes: the tokenizer would yield the same
// three fields, so split directly.
fn parse_plain(line: &str) -> Option<Record> {
    if line.contains(QUOTE) {
        return None;
    }

    let mut parts = line.split(SEPARATOR);
    let (standard, dialect, dialect_name) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    Some(Record::new(
        standard.trim(),
        dialect.trim(),
        dialect_name.trim(),
    ))
}
