//! Main Rowsift struct and public API.

use std::fs::File;
use std::io::{BufRead, Write};

use rayon::prelude::*;
use tracing::info;

use crate::config::RunConfig;
use crate::error::{Result, RowsiftError};
use crate::input::{InputSource, RawRow, RecordReader};
use crate::output::{write_statistics, Sinks};
use crate::report::{RunReport, RunTally};
use crate::rules::{RuleLoader, RuleSet};
use crate::validation::{RowValidator, ValidationOutcome};

/// Drives a validation run: load rules, split the input, write the outputs.
pub struct Rowsift {
    config: RunConfig,
}

impl Rowsift {
    /// Create a Rowsift instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(RunConfig::default())
    }

    /// Create a Rowsift instance with custom configuration.
    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the full pipeline.
    ///
    /// Rules are loaded before any output file is touched, so a bad rule
    /// file leaves no partial output behind.
    pub fn run(&self) -> Result<RunReport> {
        self.config.check()?;

        let rules = RuleLoader::load_file(&self.config.rules)?;
        let source = InputSource::open(&self.config.input)?;

        info!(
            input = %source.metadata.path.display(),
            bytes = source.metadata.size_bytes,
            parallel = self.config.parallel,
            "validating input"
        );

        let mut sinks = Sinks::create(&self.config)?;
        let reader = RecordReader::new(source.contents.as_slice(), &self.config.input);
        let mut tally = RunTally::new(&rules);

        process_records(&rules, reader, &mut sinks, &mut tally, self.config.parallel)?;
        sinks.flush()?;

        let report = tally.finish(Some(source.metadata));
        write_statistics(self.config.stats_path(), &report.statistics)?;

        if let Some(path) = self.config.summary_path() {
            let file = File::create(&path).map_err(|e| RowsiftError::io(&path, e))?;
            serde_json::to_writer_pretty(file, &report)?;
        }

        info!(
            total = report.statistics.total_rows,
            valid = report.statistics.valid_rows,
            invalid = report.statistics.invalid_rows,
            "run finished"
        );

        Ok(report)
    }
}

impl Default for Rowsift {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate every record from `reader` and route it to `sinks`.
///
/// The header, if any, goes to the clean and reject sinks first. With
/// `parallel`, records are evaluated on the rayon pool and then written in
/// input order, so the output is the same either way.
pub fn process_records<R, W>(
    rules: &RuleSet,
    mut reader: RecordReader<R>,
    sinks: &mut Sinks<W>,
    tally: &mut RunTally,
    parallel: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if let Some(header) = reader.header()? {
        sinks.write_header(&header)?;
    }

    let validator = RowValidator::new(rules);

    if parallel {
        let rows: Vec<RawRow> = reader.collect::<Result<_>>()?;
        let outcomes: Vec<ValidationOutcome> = rows
            .par_iter()
            .map(|row| validator.evaluate(&row.record))
            .collect();

        for (row, outcome) in rows.iter().zip(&outcomes) {
            emit(row, outcome, sinks, tally)?;
        }
    } else {
        for row in reader {
            let row = row?;
            let outcome = validator.evaluate(&row.record);
            emit(&row, &outcome, sinks, tally)?;
        }
    }

    Ok(())
}

fn emit<W: Write>(
    row: &RawRow,
    outcome: &ValidationOutcome,
    sinks: &mut Sinks<W>,
    tally: &mut RunTally,
) -> Result<()> {
    tally.record(outcome);
    sinks.route(&row.raw, row.record.row_number, outcome)
}
