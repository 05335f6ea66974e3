//! Load an INI file and print the resulting settings

use std::fs;
use std::path::Path;

use colored::Colorize;
use ini_settings::{Settings, load_ini};

use super::rule_table;
use crate::error::{CliError, Result};

/// Run the load command
pub fn run_load(
    ini: Option<&Path>,
    seed: Option<&Path>,
    rules: Option<&Path>,
    json: bool,
) -> Result<()> {
    let rules = rule_table(rules)?;
    let mut settings = match seed {
        Some(path) => read_seed(path)?,
        None => Settings::new(),
    };

    load_ini(ini, Some(&mut settings), Some(&*rules))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    if settings.is_empty() {
        println!("{}", "(no settings)".dimmed());
        return Ok(());
    }
    for (name, value) in settings.iter() {
        println!("{} = {}", name.green(), value);
    }
    Ok(())
}

fn read_seed(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Settings::from_value(value).ok_or_else(|| {
        CliError::user(format!(
            "Settings seed {} must be a JSON object",
            path.display()
        ))
    })
}
