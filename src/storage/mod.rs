//! Storage layer for Den Den Ink
//!
//! Notes live in a single SQLite file. Everything above this module talks
//! to it through [`NoteRepository`].

pub mod db;
pub mod error;
pub mod models;

pub use db::Database;
pub use error::{StorageError, StorageResult};
pub use models::*;

/// The operations the rest of the application may perform on the note store.
///
/// Writes are atomic and report failures. Reads follow a fail-soft policy:
/// a query that cannot run is logged and yields an empty result.
pub trait NoteRepository {
    /// Stores a general note and its tags in one transaction.
    fn add_general_note(&mut self, text: &str, tags: &[String]) -> StorageResult<NoteId>;

    /// Stores a programming note, its tags, and its metadata in one transaction.
    fn add_programming_note(
        &mut self,
        text: &str,
        tags: &[String],
        metadata: &ProgrammingMetadata,
    ) -> StorageResult<NoteId>;

    /// The `limit` most recent notes, newest first.
    fn list_recent(&self, limit: usize) -> Vec<FullNote>;

    /// All notes carrying `tag` (with or without its `#`), newest first.
    fn list_by_tag(&self, tag: &str) -> Vec<FullNote>;

    /// Notes whose text contains `query` (case-sensitive) and that carry
    /// every tag in `tags`, newest first.
    fn search(&self, query: &str, tags: &[String]) -> Vec<FullNote>;

    /// Number of stored notes.
    fn total_note_count(&self) -> i64;

    /// Tag names with their usage counts, most used first.
    fn tag_usage_counts(&self) -> Vec<StatItem>;

    /// Programming-note directories with their note counts, busiest first.
    fn project_counts(&self) -> Vec<StatItem>;

    /// Notes per calendar day (`YYYY-MM-DD`), most recent day first.
    fn daily_counts(&self) -> Vec<StatItem>;
}
