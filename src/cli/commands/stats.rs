//! Stats command - aggregate statistics about stored notes.

use anyhow::Result;
use colored::Colorize;
use std::fmt::{self, Write};

use crate::cli::OutputFormat;
use denden_ink::config::Config;
use denden_ink::stats::{self, AppStats};
use denden_ink::storage::Database;

/// Arguments for the stats command.
#[derive(clap::Args)]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the stats command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let db = Database::open_default(config)?;
    let stats = stats::gather(&db).truncated(config.stats_top, config.stats_days);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => print!("{}", render_stats(&stats, config)?),
    }
    Ok(())
}

/// Renders statistics as terminal text. Empty sections are omitted.
fn render_stats(stats: &AppStats, config: &Config) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "\n{}", "--- 📊 Den Den Ink Statistics ---".bold())?;
    writeln!(out, "\nTotal Notes: {}", stats.total_notes.to_string().cyan())?;

    if !stats.top_tags.is_empty() {
        writeln!(out, "\n{}", format!("--- Top {} Tags ---", config.stats_top).bold())?;
        for tag in &stats.top_tags {
            writeln!(
                out,
                " {:<21} ({} uses)",
                format!("#{}", tag.name).yellow(),
                tag.count
            )?;
        }
    }

    if !stats.notes_per_project.is_empty() {
        writeln!(
            out,
            "\n{}",
            format!("--- Top {} Projects ---", config.stats_top).bold()
        )?;
        for project in &stats.notes_per_project {
            writeln!(out, " {:<30} ({} notes)", project.name, project.count)?;
        }
    }

    if !stats.notes_per_day.is_empty() {
        writeln!(
            out,
            "\n{}",
            format!("--- Recent Activity (Last {} Days) ---", config.stats_days).bold()
        )?;
        for day in &stats.notes_per_day {
            writeln!(out, " {}: {} notes", day.name.dimmed(), day.count)?;
        }
    }

    writeln!(out, "\n-----------------------------------")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use denden_ink::storage::StatItem;

    fn item(name: &str, count: i64) -> StatItem {
        StatItem {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_render_empty_stats_shows_only_total() {
        let out = render_stats(&AppStats::default(), &Config::default()).expect("render");

        assert!(out.contains("Total Notes:"));
        assert!(!out.contains("Top 5 Tags"));
        assert!(!out.contains("Projects"));
        assert!(!out.contains("Recent Activity"));
    }

    #[test]
    fn test_render_all_sections() {
        let stats = AppStats {
            total_notes: 3,
            top_tags: vec![item("rust", 2)],
            notes_per_project: vec![item("/work/app", 1)],
            notes_per_day: vec![item("2025-01-15", 3)],
        };
        let out = render_stats(&stats, &Config::default()).expect("render");

        assert!(out.contains("Top 5 Tags"));
        assert!(out.contains("#rust"));
        assert!(out.contains("(2 uses)"));
        assert!(out.contains("/work/app"));
        assert!(out.contains("Last 7 Days"));
        assert!(out.contains("2025-01-15"));
        assert!(out.contains("3 notes"));
    }
}
