//! Stats command - show the statistics of a previous run.

use std::path::PathBuf;

use colored::Colorize;
use rowsift::output::{format_rate, read_statistics};
use rowsift::RunConfig;

pub fn run(
    config: RunConfig,
    file: Option<PathBuf>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = file.unwrap_or_else(|| config.stats_path());

    if !path.exists() {
        return Err(format!(
            "Statistics file not found: {}\nRun 'rowsift run' first.",
            path.display()
        )
        .into());
    }

    let stats = read_statistics(&path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Statistics from".cyan().bold(),
        path.display().to_string().white()
    );
    println!();
    println!("  Total rows:     {}", stats.total_rows.to_string().white().bold());
    println!("  Valid rows:     {}", stats.valid_rows.to_string().green());
    println!("  Invalid rows:   {}", stats.invalid_rows.to_string().red());
    println!("  Rejection rate: {}%", format_rate(stats.rejection_rate).yellow());

    Ok(())
}
