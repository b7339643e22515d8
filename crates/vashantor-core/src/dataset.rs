use vashantor_types::Record;

use crate::error::LoadError;
use crate::parser::parse_records;
use crate::split::split_window;

/// The active split of one dialect file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub dialect: String,
    pub split: usize,
    /// Never empty
    pub records: Vec<Record>,
    /// Malformed rows dropped from the whole file
    pub skipped: usize,
}

impl Dataset {
    /// Parse a fetched file and keep the window for `split`
    pub fn from_text(dialect: &str, split: usize, text: &str) -> Result<Self, LoadError> {
        let outcome = parse_records(text);
        let records = split_window(&outcome.records, split).to_vec();

        if records.is_empty() {
            tracing::warn!(
                "{} has {} records, nothing in split {}",
                dialect,
                outcome.records.len(),
                split
            );
            return Err(LoadError::EmptySplit);
        }

        Ok(Self {
            dialect: dialect.to_string(),
            split,
            records,
            skipped: outcome.skipped,
        })
    }

    /// `Chittagong (Split 2)`
    pub fn label(&self) -> String {
        format!("{} (Split {})", self.dialect, self.split)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Trimmed dialect name, or `MissingDialect` when nothing was chosen
pub fn require_dialect(dialect: Option<&str>) -> Result<&str, LoadError> {
    match dialect.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(LoadError::MissingDialect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(rows: usize) -> String {
        let mut text = String::from("Standard,Dialect,Name\n");
        for i in 0..rows {
            text.push_str(&format!("s{i},d{i},Noakhali\n"));
        }
        text
    }

    #[test]
    fn second_split_of_260_rows() {
        let dataset = Dataset::from_text("Noakhali", 2, &file_with(260)).unwrap();
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.records[0].standard, "s250");
        assert_eq!(dataset.label(), "Noakhali (Split 2)");
    }

    #[test]
    fn empty_split_is_an_error() {
        let err = Dataset::from_text("Noakhali", 3, &file_with(260)).unwrap_err();
        assert_eq!(err, LoadError::EmptySplit);
    }

    #[test]
    fn header_only_file_is_an_error() {
        let err = Dataset::from_text("Noakhali", 1, &file_with(0)).unwrap_err();
        assert_eq!(err, LoadError::EmptySplit);
    }

    #[test]
    fn skipped_rows_are_reported() {
        let text = format!("{}broken\n", file_with(3));
        let dataset = Dataset::from_text("Noakhali", 1, &text).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.skipped, 1);
    }

    #[test]
    fn dialect_is_required() {
        assert_eq!(require_dialect(None), Err(LoadError::MissingDialect));
        assert_eq!(require_dialect(Some("  ")), Err(LoadError::MissingDialect));
        assert_eq!(require_dialect(Some(" Sylhet ")), Ok("Sylhet"));
    }
}
