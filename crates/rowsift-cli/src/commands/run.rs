//! Run command - validate an input file against a rule file.

use std::path::PathBuf;

use colored::Colorize;
use rowsift::output::format_rate;
use rowsift::{Rowsift, RunConfig};

pub fn run(
    mut config: RunConfig,
    rules: Option<PathBuf>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    parallel: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(rules) = rules {
        config.rules = rules;
    }
    if let Some(input) = input {
        config.input = input;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
    config.parallel |= parallel;

    tracing::debug!(?config, "resolved configuration");

    let rowsift = Rowsift::with_config(config);
    let report = rowsift.run()?;
    let config = rowsift.config();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = &report.statistics;
    println!("{}", "Validation complete".green().bold());
    println!();
    println!("  Total rows:     {}", stats.total_rows.to_string().white().bold());
    println!("  Valid rows:     {}", stats.valid_rows.to_string().green());
    println!("  Invalid rows:   {}", stats.invalid_rows.to_string().red());
    println!("  Rejection rate: {}%", format_rate(stats.rejection_rate).yellow());

    let failing: Vec<_> = report
        .violations_by_column
        .iter()
        .filter(|(_, count)| **count > 0)
        .collect();
    if !failing.is_empty() {
        println!();
        println!("{}", "Violations by column:".yellow().bold());
        for (column, count) in failing {
            println!("  {:<20} {}", column.cyan(), count);
        }
    }

    println!();
    println!(
        "Output written to {}",
        config.output_dir.display().to_string().cyan()
    );

    Ok(())
}
