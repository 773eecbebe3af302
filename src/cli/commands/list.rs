//! List command - show recent notes or notes with a tag.

use anyhow::Result;

use crate::cli::format::print_notes;
use crate::cli::OutputFormat;
use denden_ink::config::Config;
use denden_ink::storage::{Database, NoteRepository};

/// Arguments for the list command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    ink list                  Show the most recent notes\n    \
    ink list --limit 50       Show up to 50 notes\n    \
    ink list rust             Show every note tagged #rust\n    \
    ink list --format json    Output as JSON")]
pub struct Args {
    /// Only show notes with this tag (with or without #)
    #[arg(value_name = "TAG")]
    pub tag: Option<String>,

    /// Maximum number of recent notes (ignored with a tag)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the list command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let db = Database::open_default(config)?;

    let notes = match args.tag.as_deref() {
        Some(tag) => db.list_by_tag(tag),
        None => db.list_recent(args.limit.unwrap_or(config.recent_limit)),
    };

    print_notes(&notes, args.format)
}
