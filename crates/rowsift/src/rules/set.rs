//! Ordered, immutable collection of column rules.

use tracing::debug;

use crate::error::{Result, RowsiftError};

use super::rule::{Rule, RuleEntry};

/// Rules keyed by zero-based column position.
///
/// Positions follow declaration order and are contiguous from 0. A rule set
/// is never mutated after construction, so a shared reference can be read
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// A rule set with no columns; every record validates against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a rule set from entries in declaration order.
    ///
    /// Fails on the first pattern that does not compile; no partial set is
    /// returned.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuleEntry>,
    {
        let mut rules = Vec::new();

        for entry in entries {
            let rule = Rule::from_entry(&entry).map_err(|source| RowsiftError::InvalidPattern {
                line: entry.line,
                pattern: entry.pattern.clone(),
                source,
            })?;

            debug!(
                column = rules.len(),
                label = rule.column(),
                required = rule.required(),
                pattern = rule.pattern_source().unwrap_or(""),
                declared_type = rule.declared_type().label(),
                "loaded rule"
            );
            rules.push(rule);
        }

        Ok(Self { rules })
    }

    /// Number of columns with a rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule for a zero-based column.
    pub fn get(&self, column: usize) -> Option<&Rule> {
        self.rules.get(column)
    }

    /// Iterate `(column, rule)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Rule)> {
        self.rules.iter().enumerate()
    }

    /// Display name for a column: its label, or `column_{n}` (1-based) when unlabeled.
    pub fn column_label(&self, column: usize) -> String {
        match self.rules.get(column).map(Rule::column) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("column_{}", column + 1),
        }
    }
}
