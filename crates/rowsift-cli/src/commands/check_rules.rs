//! Check-rules command - load a rule file and list its columns.

use std::path::PathBuf;

use colored::Colorize;
use rowsift::RuleLoader;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Rules file not found: {}", file.display()).into());
    }

    let rules = RuleLoader::load_file(&file)?;

    println!(
        "{} {} ({} columns)",
        "Rules in".cyan().bold(),
        file.display().to_string().white(),
        rules.len()
    );

    if rules.is_empty() {
        println!(
            "  {} No rules defined; every row will be accepted.",
            "Note:".yellow()
        );
        return Ok(());
    }

    println!();
    for (column, rule) in rules.iter() {
        let required = if rule.required() {
            "required".green().to_string()
        } else {
            "optional".dimmed().to_string()
        };

        println!(
            "  {:>3}  {:<20} {}  type={}  pattern={}",
            column + 1,
            rules.column_label(column).cyan(),
            required,
            rule.declared_type().label(),
            rule.pattern_source().unwrap_or("-")
        );

        if verbose {
            if let Some(re) = rule.pattern() {
                println!("       {} {}", "compiled:".dimmed(), re.as_str().dimmed());
            }
        }
    }

    Ok(())
}
