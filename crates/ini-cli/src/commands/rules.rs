//! Rule table listing and matching commands

use std::path::Path;

use colored::Colorize;
use ini_settings::{RuleFile, RuleKey, match_setting};

use super::rule_table;
use crate::error::Result;

/// Run the rules command
pub fn run_rules(rules: Option<&Path>, toml: bool) -> Result<()> {
    let table = rule_table(rules)?;

    if toml {
        print!("{}", RuleFile::from_table(&table).to_toml()?);
        return Ok(());
    }

    println!("{}", "Rules".bold());
    println!();
    for (key, setting) in table.iter() {
        println!(
            "  {:<32} {:<10} {}",
            key.to_string().green(),
            setting.kind.to_string().cyan(),
            setting.target
        );
    }
    println!();
    println!("{} {} rules", "Total:".dimmed(), table.len());

    Ok(())
}

/// Run the match command
pub fn run_match(section: &str, option: &str, rules: Option<&Path>) -> Result<()> {
    let table = rule_table(rules)?;
    // Option names are folded to lower case when INI files are read.
    let option = option.to_lowercase();

    let Some(setting) = match_setting(section, &option, &table) else {
        println!(
            "{} [{}] {} has no rule and would be skipped",
            "skip".yellow().bold(),
            section,
            option
        );
        return Ok(());
    };

    let matched_by = if table.get(&RuleKey::exact(section, &option)).is_some() {
        "exact rule"
    } else {
        "section wildcard"
    };
    println!(
        "{} [{}] {} -> {} ({}, {})",
        "match".green().bold(),
        section,
        option,
        setting.resolve_target(section, &option),
        setting.kind,
        matched_by
    );

    Ok(())
}
