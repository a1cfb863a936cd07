//! Column rules: the rule model, the ordered rule set and the rule-file loader.

mod loader;
mod rule;
mod set;

pub use loader::{RuleLoader, RULE_FIELD_COUNT};
pub use rule::{DeclaredType, Rule, RuleEntry};
pub use set::RuleSet;
