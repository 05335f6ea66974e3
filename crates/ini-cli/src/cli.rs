//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ini-settings - Load INI files into application settings
#[derive(Parser, Debug)]
#[command(name = "ini-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load an INI file and print the resulting settings
    ///
    /// Examples:
    ///   ini-settings load app.ini
    ///   ini-settings load app.ini --settings seed.json --json
    ///   INI_SETTINGS_FILE=app.ini ini-settings load
    Load {
        /// INI file to load (defaults to $INI_SETTINGS_FILE)
        ini: Option<PathBuf>,

        /// JSON object to seed the settings with before loading
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// TOML rule file to use instead of the built-in rules
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rule table
    Rules {
        /// TOML rule file to list instead of the built-in rules
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Print the table as a TOML rule file
        #[arg(long)]
        toml: bool,
    },

    /// Show which rule applies to an option
    Match {
        /// Section name
        section: String,

        /// Option name
        option: String,

        /// TOML rule file to match against instead of the built-in rules
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}
