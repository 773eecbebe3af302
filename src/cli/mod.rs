//! Command-line interface for Den Den Ink.
//!
//! Provides the CLI commands for writing, listing, searching, and
//! summarizing notes.

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting utilities.
pub mod format;

pub use format::OutputFormat;
