//! Records and validation outcomes.

use serde::{Deserialize, Serialize};

use super::violation::Violation;

/// One input row split into raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based row number, not counting the header.
    pub row_number: usize,
    /// Raw field strings, before quote stripping and trimming.
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(row_number: usize, fields: Vec<String>) -> Self {
        Self { row_number, fields }
    }

    /// Build a record from borrowed fields.
    pub fn from_fields<S: AsRef<str>>(row_number: usize, fields: &[S]) -> Self {
        Self::new(
            row_number,
            fields.iter().map(|f| f.as_ref().to_string()).collect(),
        )
    }

    /// Cleaned value for a column: double quotes removed, then trimmed.
    ///
    /// Trimming drops characters up to and including U+0020 (space and
    /// control characters); other Unicode whitespace such as NBSP is kept.
    /// Columns past the end of the record are empty.
    pub fn value(&self, column: usize) -> String {
        match self.fields.get(column) {
            Some(raw) => raw.replace('"', "").trim_matches(|c: char| c <= ' ').to_string(),
            None => String::new(),
        }
    }
}

/// Result of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub violations: Vec<Violation>,
}

impl ValidationOutcome {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// A record is valid when it has no violations.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Space-joined rendering of all violations.
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Audit line for this outcome: `Row {n}: {violations}`.
    pub fn audit_line(&self, row_number: usize) -> String {
        format!("Row {}: {}", row_number, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ViolationReason;

    #[test]
    fn test_value_strips_quotes_and_trims() {
        let record = Record::from_fields(1, &["\"  42 \"", " a\"b ", ""]);
        assert_eq!(record.value(0), "42");
        assert_eq!(record.value(1), "ab");
        assert_eq!(record.value(2), "");
        assert_eq!(record.value(3), "");
    }

    #[test]
    fn test_value_trims_control_chars_only() {
        let record = Record::from_fields(1, &["\x015\x01", "\u{a0}", "\t7\u{a0}"]);
        assert_eq!(record.value(0), "5");
        assert_eq!(record.value(1), "\u{a0}");
        assert_eq!(record.value(2), "7\u{a0}");
    }

    #[test]
    fn test_audit_line() {
        let outcome = ValidationOutcome::new(vec![
            Violation::new(0, ViolationReason::Required),
            Violation::new(2, ViolationReason::NotInteger),
        ]);
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.audit_line(4),
            "Row 4: Column 1 required. Column 3 not integer."
        );
    }

    #[test]
    fn test_empty_outcome_is_valid() {
        let outcome = ValidationOutcome::default();
        assert!(outcome.is_valid());
        assert_eq!(outcome.message(), "");
    }
}
