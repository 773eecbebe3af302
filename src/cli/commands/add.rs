//! Add command - store a general or programming note.
//!
//! The note body and tags are parsed from the words given on the command
//! line. Programming notes also capture the current directory, the last
//! edited file, and git state.

use anyhow::{bail, Context, Result};
use colored::Colorize;

use denden_ink::config::Config;
use denden_ink::input::parse_note_input;
use denden_ink::metadata::collect_metadata;
use denden_ink::storage::{Database, NoteKind, NoteRepository};

/// Arguments for the programming note command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    ink p \"retry logic lives in client.rs\" '#http'\n    \
    ink p 'fix flaky test before merging #ci #todo'")]
pub struct Args {
    /// Note text; words starting with # become tags
    #[arg(value_name = "NOTE", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Executes the add command for either note kind.
pub fn run(words: &[String], kind: NoteKind, config: &Config) -> Result<()> {
    let input = parse_note_input(words);
    if input.text.trim().is_empty() {
        bail!("Note text cannot be empty");
    }

    let mut db = Database::open_default(config)?;

    let id = match kind {
        NoteKind::General => db.add_general_note(&input.text, &input.tags),
        NoteKind::Programming => {
            let metadata = collect_metadata();
            tracing::debug!("Collected metadata: {:?}", metadata);
            db.add_programming_note(&input.text, &input.tags, &metadata)
        }
    }
    .context("Could not save the note")?;

    let label = match kind {
        NoteKind::General => "Note",
        NoteKind::Programming => "Programming note",
    };
    if input.tags.is_empty() {
        println!("{}", format!("{label} #{id} saved. 🐌").green());
    } else {
        println!(
            "{} {}",
            format!("{label} #{id} saved with tags:").green(),
            input.tags.join(" ").yellow()
        );
    }

    Ok(())
}
