//! ini-settings CLI
//!
//! Loads INI files into a settings object using the rule table and prints
//! the result.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} INI settings loader", "ini-settings".green().bold());
            println!();
            println!("Run {} for available commands.", "ini-settings --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Load {
            ini,
            settings,
            rules,
            json,
        } => commands::run_load(ini.as_deref(), settings.as_deref(), rules.as_deref(), json),
        Commands::Rules { rules, toml } => commands::run_rules(rules.as_deref(), toml),
        Commands::Match {
            section,
            option,
            rules,
        } => commands::run_match(&section, &option, rules.as_deref()),
    }
}
