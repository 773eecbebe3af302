//! Config command - show the resolved configuration

use anyhow::Result;
use colored::Colorize;

use denden_ink::config::{Config, DB_PATH_ENV};

pub fn run(config: &Config) -> Result<()> {
    println!("{}", "Den Den Ink Configuration".bold());
    println!();

    let config_path = Config::config_path()?;
    let config_state = if config_path.exists() {
        "".normal()
    } else {
        "(not present, using defaults)".dimmed()
    };
    println!(
        "  {}  {} {}",
        "Config file:".dimmed(),
        config_path.display(),
        config_state
    );

    let db_path = config.db_path()?;
    let db_source = if std::env::var_os(DB_PATH_ENV).is_some_and(|v| !v.is_empty()) {
        format!("(from {DB_PATH_ENV})")
    } else if config.db_path.is_some() {
        "(from config file)".to_string()
    } else {
        String::new()
    };
    println!(
        "  {}     {} {}",
        "Database:".dimmed(),
        db_path.display(),
        db_source.dimmed()
    );

    println!();
    println!("{}", "Settings:".bold());
    println!("  recent_limit: {}", config.recent_limit);
    println!("  stats_top:    {}", config.stats_top);
    println!("  stats_days:   {}", config.stats_days);

    Ok(())
}
