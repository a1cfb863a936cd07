//! Row validation against a rule set.

use crate::rules::{Rule, RuleSet};

use super::record::{Record, ValidationOutcome};
use super::violation::{Violation, ViolationReason};

/// Evaluates records against a shared rule set.
///
/// Iteration is driven by the rule count: columns missing from a record are
/// checked as empty values and extra fields are ignored.
#[derive(Debug, Clone, Copy)]
pub struct RowValidator<'a> {
    rules: &'a RuleSet,
}

impl<'a> RowValidator<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Check every column of a record. Pure: no I/O and no shared state.
    pub fn evaluate(&self, record: &Record) -> ValidationOutcome {
        let mut violations = Vec::new();

        for (column, rule) in self.rules.iter() {
            let value = record.value(column);
            check_column(column, rule, &value, &mut violations);
        }

        ValidationOutcome::new(violations)
    }
}

/// Run the three independent checks for one column, in order.
fn check_column(column: usize, rule: &Rule, value: &str, violations: &mut Vec<Violation>) {
    if rule.required() && value.is_empty() {
        violations.push(Violation::new(column, ViolationReason::Required));
    }

    if value.is_empty() {
        return;
    }

    if !rule.matches_format(value) {
        violations.push(Violation::new(column, ViolationReason::InvalidFormat));
    }

    if !rule.declared_type().accepts(value) {
        violations.push(Violation::new(column, ViolationReason::NotInteger));
    }
}
