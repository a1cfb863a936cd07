//! Rowsift: rule-driven row validation for delimited tabular data.
//!
//! Each input row is checked column by column against a rule set and sent
//! either to the clean output or to the reject output, with one audit line
//! explaining every rejection.
//!
//! # Core Principles
//!
//! - **Positional rules**: the n-th rule applies to the n-th field
//! - **Non-destructive**: rows are written exactly as they were read
//! - **Ordered output**: every output keeps input row order
//!
//! # Example
//!
//! ```
//! use rowsift::{Record, RowValidator, RuleEntry, RuleSet};
//!
//! let rules = RuleSet::from_entries(vec![
//!     RuleEntry::new("true", "", ""),
//!     RuleEntry::new("false", "^[A-Z]+$", ""),
//!     RuleEntry::new("false", "", "int"),
//! ])
//! .unwrap();
//!
//! let outcome = RowValidator::new(&rules).evaluate(&Record::from_fields(1, &["", "ABC", "12x"]));
//! assert_eq!(outcome.message(), "Column 1 required. Column 3 not integer.");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod rules;
pub mod validation;

mod engine;

pub use crate::engine::{process_records, Rowsift};
pub use config::RunConfig;
pub use error::{Result, RowsiftError};
pub use input::{RecordReader, SourceMetadata};
pub use output::Sinks;
pub use report::{RunReport, RunStatistics, RunTally};
pub use rules::{DeclaredType, Rule, RuleEntry, RuleLoader, RuleSet};
pub use validation::{Record, RowValidator, ValidationOutcome, Violation, ViolationReason};
