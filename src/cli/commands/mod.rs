//! CLI commands for Den Den Ink.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Add general and programming notes.
pub mod add;

/// Shell completion scripts.
pub mod completions;

/// Show resolved configuration.
pub mod config;

/// List recent notes or notes with a tag.
pub mod list;

/// Search note text, optionally narrowed by tags.
pub mod search;

/// Aggregate statistics.
pub mod stats;
