//! Run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RowsiftError};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rowsift.toml";

/// Configuration for a validation run.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Rule definition file.
    pub rules: PathBuf,
    /// Input data file.
    pub input: PathBuf,
    /// Directory receiving every output file; created when missing.
    pub output_dir: PathBuf,
    pub clean_file: String,
    pub reject_file: String,
    pub audit_file: String,
    pub stats_file: String,
    /// JSON run report file; disabled when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<String>,
    /// Evaluate rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rules: PathBuf::from("resources/rules.csv"),
            input: PathBuf::from("resources/raw.csv"),
            output_dir: PathBuf::from("output"),
            clean_file: "clean.csv".to_string(),
            reject_file: "rejects.csv".to_string(),
            audit_file: "audit.txt".to_string(),
            stats_file: "stats.csv".to_string(),
            summary_file: None,
            parallel: false,
        }
    }
}

impl RunConfig {
    /// Load config from a TOML file.
    ///
    /// Relative paths in the file are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RowsiftError::io(path, e))?;

        let mut config = Self::from_toml(&contents)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Load config from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let mut config: RunConfig = toml::from_str(toml)?;
        if config.summary_name().is_none() {
            config.summary_file = None;
        }
        config.check()?;
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.rules, &mut self.input, &mut self.output_dir] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Reject file names that would escape the output directory or collide.
    pub fn check(&self) -> Result<()> {
        let mut names = vec![
            ("clean_file", self.clean_file.as_str()),
            ("reject_file", self.reject_file.as_str()),
            ("audit_file", self.audit_file.as_str()),
            ("stats_file", self.stats_file.as_str()),
        ];
        if let Some(summary) = self.summary_name() {
            names.push(("summary_file", summary));
        }

        for (i, (key, name)) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RowsiftError::Config(format!("{} must not be empty", key)));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(RowsiftError::Config(format!(
                    "{} must be a file name, got '{}'",
                    key, name
                )));
            }
            if let Some((other, _)) = names[..i].iter().find(|(_, n)| n == name) {
                return Err(RowsiftError::Config(format!(
                    "{} and {} both name '{}'",
                    other, key, name
                )));
            }
        }
        Ok(())
    }

    pub fn clean_path(&self) -> PathBuf {
        self.output_dir.join(&self.clean_file)
    }

    pub fn reject_path(&self) -> PathBuf {
        self.output_dir.join(&self.reject_file)
    }

    pub fn audit_path(&self) -> PathBuf {
        self.output_dir.join(&self.audit_file)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.output_dir.join(&self.stats_file)
    }

    /// Summary file name; a blank name disables the report.
    fn summary_name(&self) -> Option<&str> {
        self.summary_file
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    pub fn summary_path(&self) -> Option<PathBuf> {
        self.summary_name().map(|f| self.output_dir.join(f))
    }
}
