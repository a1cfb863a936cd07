//! Output sinks for clean rows, rejected rows, the audit log and statistics.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::RunConfig;
use crate::error::{Result, RowsiftError};
use crate::report::RunStatistics;
use crate::validation::ValidationOutcome;

/// Column headers of the statistics file.
pub const STATS_HEADER: [&str; 4] = [
    "Total Rows",
    "Valid Rows",
    "Invalid Rows",
    "Rejection Rate (%)",
];

/// A line-oriented writer that knows its destination path.
pub struct LineSink<W: Write> {
    path: PathBuf,
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer,
        }
    }

    /// Write one line followed by `\n`.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_bytes(line.as_bytes())
    }

    /// Write raw bytes followed by `\n`, unchanged.
    pub fn write_bytes(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| RowsiftError::io(&self.path, e))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| RowsiftError::io(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<BufWriter<File>> {
    /// Create (or truncate) a file sink.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| RowsiftError::io(&path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

/// The three row-level sinks of a run.
pub struct Sinks<W: Write> {
    pub clean: LineSink<W>,
    pub reject: LineSink<W>,
    pub audit: LineSink<W>,
}

impl<W: Write> Sinks<W> {
    pub fn new(clean: LineSink<W>, reject: LineSink<W>, audit: LineSink<W>) -> Self {
        Self {
            clean,
            reject,
            audit,
        }
    }

    /// Copy the input header to the clean and reject sinks.
    pub fn write_header(&mut self, header: &[u8]) -> Result<()> {
        self.clean.write_bytes(header)?;
        self.reject.write_bytes(header)
    }

    /// Send a raw line to the sink its outcome selects.
    ///
    /// Invalid rows also get an audit line.
    pub fn route(&mut self, line: &[u8], row_number: usize, outcome: &ValidationOutcome) -> Result<()> {
        if outcome.is_valid() {
            self.clean.write_bytes(line)
        } else {
            debug!(row = row_number, violations = outcome.violations.len(), "row rejected");
            self.reject.write_bytes(line)?;
            self.audit.write_line(&outcome.audit_line(row_number))
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.clean.flush()?;
        self.reject.flush()?;
        self.audit.flush()
    }
}

impl Sinks<BufWriter<File>> {
    /// Create the output directory and open the three sink files.
    pub fn create(config: &RunConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir)
            .map_err(|e| RowsiftError::io(&config.output_dir, e))?;

        Ok(Self::new(
            LineSink::create(config.clean_path())?,
            LineSink::create(config.reject_path())?,
            LineSink::create(config.audit_path())?,
        ))
    }
}

/// Format a rejection rate so it always shows a fractional part.
pub fn format_rate(rate: f64) -> String {
    format!("{:?}", rate)
}

/// Write the statistics file: a header row and one data row.
pub fn write_statistics(path: impl AsRef<Path>, stats: &RunStatistics) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RowsiftError::io(path, e))?;
    write_statistics_to(file, stats)
}

/// Write statistics CSV to any writer.
pub fn write_statistics_to<W: Write>(writer: W, stats: &RunStatistics) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(STATS_HEADER)?;
    writer.write_record([
        stats.total_rows.to_string(),
        stats.valid_rows.to_string(),
        stats.invalid_rows.to_string(),
        format_rate(stats.rejection_rate),
    ])?;
    writer.flush().map_err(|e| RowsiftError::Csv(e.into()))?;
    Ok(())
}

/// Read a statistics file written by [`write_statistics`].
pub fn read_statistics(path: impl AsRef<Path>) -> Result<RunStatistics> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RowsiftError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let record = match reader.records().next() {
        Some(record) => record?,
        None => {
            return Err(RowsiftError::Config(format!(
                "statistics file '{}' has no data row",
                path.display()
            )));
        }
    };

    Ok(RunStatistics {
        total_rows: parse_stat(&record, 0, path)?,
        valid_rows: parse_stat(&record, 1, path)?,
        invalid_rows: parse_stat(&record, 2, path)?,
        rejection_rate: parse_stat(&record, 3, path)?,
    })
}

fn parse_stat<T: std::str::FromStr>(record: &csv::StringRecord, index: usize, path: &Path) -> Result<T> {
    let name = STATS_HEADER[index];
    let raw = record.get(index).ok_or_else(|| {
        RowsiftError::Config(format!(
            "statistics file '{}' is missing '{}'",
            path.display(),
            name
        ))
    })?;

    raw.trim()
        .parse()
        .map_err(|_| RowsiftError::Config(format!("invalid {} value '{}'", name, raw)))
}
