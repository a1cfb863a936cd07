//! A single column rule and the raw entry it is built from.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Type a column's values are declared to have.
///
/// Only [`DeclaredType::Integer`] triggers a check. Other declared types are
/// kept so they can be reported back, but values are never tested against them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredType {
    /// No type declared.
    #[default]
    None,
    /// Base-10 32-bit signed integer.
    Integer,
    /// Any other type name, stored verbatim.
    Other(String),
}

impl DeclaredType {
    /// Normalize a type name from a rule definition.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            DeclaredType::None
        } else if raw.eq_ignore_ascii_case("int") {
            DeclaredType::Integer
        } else {
            DeclaredType::Other(raw.to_string())
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &str {
        match self {
            DeclaredType::None => "-",
            DeclaredType::Integer => "int",
            DeclaredType::Other(name) => name,
        }
    }

    /// Check a non-empty value against this type.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            DeclaredType::Integer => value.parse::<i32>().is_ok(),
            DeclaredType::None | DeclaredType::Other(_) => true,
        }
    }
}

/// One unparsed rule definition, as it appears in a rule source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEntry {
    /// Column label (reporting only).
    pub column: String,
    /// Required flag; true iff it equals "true" ignoring case.
    pub required: String,
    /// Regular expression source; empty means no format check.
    pub pattern: String,
    /// Declared type name; empty means none.
    pub declared_type: String,
    /// 1-based line in the rule source, 0 when unknown.
    pub line: usize,
}

impl RuleEntry {
    /// Create an entry from its three rule fields.
    pub fn new(
        required: impl Into<String>,
        pattern: impl Into<String>,
        declared_type: impl Into<String>,
    ) -> Self {
        Self {
            column: String::new(),
            required: required.into(),
            pattern: pattern.into(),
            declared_type: declared_type.into(),
            line: 0,
        }
    }

    /// Set the column label.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Set the source line.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// Validation rule for one column.
#[derive(Debug, Clone)]
pub struct Rule {
    column: String,
    required: bool,
    pattern_source: Option<String>,
    pattern: Option<Regex>,
    declared_type: DeclaredType,
}

impl Rule {
    /// Build a rule from its definition entry.
    ///
    /// The pattern is compiled for full-value matching.
    pub fn from_entry(entry: &RuleEntry) -> Result<Self, regex::Error> {
        let (pattern_source, pattern) = if entry.pattern.is_empty() {
            (None, None)
        } else {
            let anchored = Regex::new(&format!("^(?:{})$", entry.pattern))?;
            (Some(entry.pattern.clone()), Some(anchored))
        };

        Ok(Self {
            column: entry.column.trim().to_string(),
            required: entry.required.eq_ignore_ascii_case("true"),
            pattern_source,
            pattern,
            declared_type: DeclaredType::parse(&entry.declared_type),
        })
    }

    /// Column label, possibly empty.
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Compiled, anchored pattern.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Pattern as written in the rule source.
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern_source.as_deref()
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    /// Whether a non-empty value satisfies the format pattern.
    pub fn matches_format(&self, value: &str) -> bool {
        self.pattern.as_ref().is_none_or(|re| re.is_match(value))
    }
}
