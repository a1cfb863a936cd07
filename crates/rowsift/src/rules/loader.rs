//! Rule-file loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{Result, RowsiftError};

use super::rule::RuleEntry;
use super::set::RuleSet;

/// Fields per rule row: column, required, pattern, type.
pub const RULE_FIELD_COUNT: usize = 4;

/// Reads rule definitions from CSV.
///
/// The first row is a header and is skipped. Each following row is
/// `column,required,pattern,type`; quoted fields may contain commas.
pub struct RuleLoader;

impl RuleLoader {
    /// Load a rule set from a file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<RuleSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RowsiftError::io(path, e))?;

        let rules = Self::load_reader(file)?;
        info!(path = %path.display(), columns = rules.len(), "rules loaded");
        Ok(rules)
    }

    /// Load a rule set from any reader.
    pub fn load_reader<R: Read>(reader: R) -> Result<RuleSet> {
        RuleSet::from_entries(Self::read_entries(reader)?)
    }

    /// Read raw entries without compiling them.
    pub fn read_entries<R: Read>(reader: R) -> Result<Vec<RuleEntry>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

            if record.len() < RULE_FIELD_COUNT {
                return Err(RowsiftError::RuleDefinition {
                    line,
                    message: format!(
                        "expected {} fields (column,required,pattern,type), found {}",
                        RULE_FIELD_COUNT,
                        record.len()
                    ),
                });
            }

            entries.push(
                RuleEntry::new(&record[1], &record[2], &record[3])
                    .with_column(&record[0])
                    .at_line(line),
            );
        }

        Ok(entries)
    }
}
