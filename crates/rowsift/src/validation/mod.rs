//! Validation engine: checks records column by column against a rule set.

mod record;
mod validator;
mod violation;

pub use record::{Record, ValidationOutcome};
pub use validator::RowValidator;
pub use violation::{Violation, ViolationReason};
