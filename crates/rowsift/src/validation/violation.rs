//! Violation types for rejected rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a column failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// Required column is empty.
    Required,
    /// Value does not fully match the column pattern.
    InvalidFormat,
    /// Value of an integer column does not parse.
    NotInteger,
}

impl ViolationReason {
    /// Phrase used in audit lines.
    pub fn phrase(&self) -> &'static str {
        match self {
            ViolationReason::Required => "required",
            ViolationReason::InvalidFormat => "invalid format",
            ViolationReason::NotInteger => "not integer",
        }
    }
}

/// One failed check on one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Zero-based column index.
    pub column: usize,
    pub reason: ViolationReason,
}

impl Violation {
    pub fn new(column: usize, reason: ViolationReason) -> Self {
        Self { column, reason }
    }
}

/// Renders as `Column {n} {phrase}.` with a 1-based column number.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column {} {}.", self.column + 1, self.reason.phrase())
    }
}
