//! Output formatting utilities for CLI commands.
//!
//! Provides a unified `OutputFormat` enum and the note renderer shared by
//! `list` and `search`.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::fmt::{self, Write};

use denden_ink::storage::{FullNote, NoteKind, NOT_AVAILABLE};

const RULE: &str = "----------------------------------------";

/// Output format options for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Prints query results in the requested format.
pub fn print_notes(notes: &[FullNote], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(notes)?),
        OutputFormat::Text => print!("{}", render_notes(notes)?),
    }
    Ok(())
}

/// Renders notes as terminal text.
pub fn render_notes(notes: &[FullNote]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if notes.is_empty() {
        writeln!(out, "{}", "No notes found. 🐌".dimmed())?;
        return Ok(out);
    }

    writeln!(
        out,
        "{}",
        format!("--- 🐌 Den Den Ink Found {} Note(s) ---", notes.len()).bold()
    )?;
    for note in notes {
        render_note(&mut out, note)?;
    }
    Ok(out)
}

fn render_note(out: &mut String, full: &FullNote) -> fmt::Result {
    let note = &full.note;

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "ID:        {}", note.id.to_string().cyan())?;
    writeln!(out, "Type:      {}", note.kind)?;
    writeln!(
        out,
        "Created:   {}",
        note.created_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    )?;

    if !full.tags.is_empty() {
        let tags: Vec<String> = full.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(out, "Tags:      {}", tags.join(" ").yellow())?;
    }

    writeln!(out, "\n> {}", note.text)?;

    if note.kind == NoteKind::Programming {
        let meta = &full.metadata;
        writeln!(out, "\n  {}", "[Code Meta]".bold())?;
        writeln!(out, "  Directory:  {}", meta.current_directory)?;
        if is_known(&meta.last_edited_file) {
            writeln!(out, "  Last File:  {}", meta.last_edited_file)?;
        }
        if is_known(&meta.git_branch) {
            writeln!(out, "  Git Branch: {}", meta.git_branch.yellow())?;
        }
        if is_known(&meta.git_commit_hash) {
            let short: String = meta.git_commit_hash.chars().take(8).collect();
            writeln!(out, "  Commit:     {}", short.dimmed())?;
        }
    }
    writeln!(out, "{RULE}")
}

fn is_known(value: &str) -> bool {
    !value.is_empty() && value != NOT_AVAILABLE
}
