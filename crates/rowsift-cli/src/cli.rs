//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rowsift: rule-driven row validation for CSV data
#[derive(Parser)]
#[command(name = "rowsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (default: rowsift.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an input file and split it into clean and rejected rows
    Run {
        /// Rule definition file (CSV: column,required,pattern,type)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Input data file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for clean, reject, audit and statistics files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Evaluate rows in parallel (output order is unchanged)
        #[arg(long)]
        parallel: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a rule file and list the rule for each column
    CheckRules {
        /// Rule definition file
        #[arg(value_name = "RULES")]
        file: PathBuf,
    },

    /// Show a statistics file written by a previous run
    Stats {
        /// Statistics file (default: stats file of the configured output directory)
        #[arg(value_name = "STATS_CSV")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
