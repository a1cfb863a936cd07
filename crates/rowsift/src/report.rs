//! Run statistics and the run report.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::SourceMetadata;
use crate::rules::RuleSet;
use crate::validation::ValidationOutcome;

/// Row counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub total_rows: u64,
    pub valid_rows: u64,
    pub invalid_rows: u64,
    /// Percentage of rows rejected; 0 when no rows were read.
    pub rejection_rate: f64,
}

impl RunStatistics {
    /// Count one outcome. The rate is not updated until [`finalize`](Self::finalize).
    pub fn record(&mut self, outcome: &ValidationOutcome) {
        self.total_rows += 1;
        if outcome.is_valid() {
            self.valid_rows += 1;
        } else {
            self.invalid_rows += 1;
        }
    }

    /// Compute the rejection rate from the counts.
    pub fn finalize(&mut self) {
        self.rejection_rate = if self.total_rows == 0 {
            0.0
        } else {
            self.invalid_rows as f64 * 100.0 / self.total_rows as f64
        };
    }

    /// Build finalized statistics from raw counts.
    pub fn from_counts(total_rows: u64, valid_rows: u64, invalid_rows: u64) -> Self {
        let mut stats = Self {
            total_rows,
            valid_rows,
            invalid_rows,
            rejection_rate: 0.0,
        };
        stats.finalize();
        stats
    }
}

/// Everything known about a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub statistics: RunStatistics,
    /// Violation counts per column label, in column order. Columns without
    /// violations are listed with zero; columns sharing a label are merged.
    pub violations_by_column: IndexMap<String, u64>,
    /// Metadata about the input file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<SourceMetadata>,
    /// Number of column rules.
    pub rule_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Accumulates statistics and per-column counts during a run.
#[derive(Debug, Clone)]
pub struct RunTally {
    statistics: RunStatistics,
    labels: Vec<String>,
    violation_counts: Vec<u64>,
    started_at: DateTime<Utc>,
}

impl RunTally {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            statistics: RunStatistics::default(),
            labels: (0..rules.len()).map(|c| rules.column_label(c)).collect(),
            violation_counts: vec![0; rules.len()],
            started_at: Utc::now(),
        }
    }

    /// Count one evaluated record.
    pub fn record(&mut self, outcome: &ValidationOutcome) {
        self.statistics.record(outcome);
        for violation in &outcome.violations {
            if let Some(count) = self.violation_counts.get_mut(violation.column) {
                *count += 1;
            }
        }
    }

    /// Statistics so far, rate not yet finalized.
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Finalize the statistics and build the report.
    pub fn finish(mut self, input: Option<SourceMetadata>) -> RunReport {
        self.statistics.finalize();

        let rule_count = self.labels.len();
        let mut violations_by_column = IndexMap::new();
        for (label, count) in self.labels.into_iter().zip(self.violation_counts) {
            *violations_by_column.entry(label).or_insert(0) += count;
        }

        RunReport {
            statistics: self.statistics,
            violations_by_column,
            input,
            rule_count,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
