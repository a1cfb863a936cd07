//! Rowsift CLI - rule-driven row validation.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::execute(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
