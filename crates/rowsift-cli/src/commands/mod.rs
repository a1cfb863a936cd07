//! CLI command implementations.

pub mod check_rules;
pub mod run;
pub mod stats;

use std::path::Path;

use colored::Colorize;
use rowsift::config::DEFAULT_CONFIG_FILE;
use rowsift::RunConfig;

use crate::cli::{Cli, Commands};

/// Dispatch a parsed command line.
///
/// Only `run` and `stats` resolve the config file; `check-rules` works on
/// its argument alone.
pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        command,
        verbose,
        config,
    } = cli;

    match command {
        Commands::Run {
            rules,
            input,
            output_dir,
            parallel,
            json,
        } => {
            let config = load_config(config.as_deref(), verbose)?;
            run::run(config, rules, input, output_dir, parallel, json)
        }

        Commands::CheckRules { file } => check_rules::run(file, verbose),

        Commands::Stats { file, json } => {
            let config = load_config(config.as_deref(), verbose)?;
            stats::run(config, file, json)
        }
    }
}

/// Resolve the run configuration: `--config`, then `./rowsift.toml`, then defaults.
pub fn load_config(
    explicit: Option<&Path>,
    verbose: bool,
) -> Result<RunConfig, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return Ok(RunConfig::from_file(path)?);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Ok(RunConfig::from_file(default_path)?);
    }

    if verbose {
        eprintln!("{}", "No config file found, using defaults".yellow());
    }
    Ok(RunConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn sample_rules() -> String {
        format!("{}/../../resources/rules.csv", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_check_rules_ignores_broken_config() {
        let cli = Cli::try_parse_from([
            "rowsift",
            "--config",
            "/nonexistent/rowsift.toml",
            "check-rules",
            &sample_rules(),
        ])
        .unwrap();

        assert!(execute(cli).is_ok());
    }

    #[test]
    fn test_stats_reads_config() {
        let cli = Cli::try_parse_from([
            "rowsift",
            "--config",
            "/nonexistent/rowsift.toml",
            "stats",
        ])
        .unwrap();

        let err = execute(cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rowsift.toml"));
    }
}
