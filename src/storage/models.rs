//! Core data models for Den Den Ink
//!
//! These mirror the three stored relations (notes, tags, metadata) plus the
//! read-side projection returned by every query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Store-assigned note identifier.
pub type NoteId = i64;

/// Sentinel stored when a metadata value could not be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// The kind of a note.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// A plain note.
    General,
    /// A note captured with an environment snapshot.
    Programming,
}

impl NoteKind {
    /// Value stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::General => "general",
            NoteKind::Programming => "programming",
        }
    }

    /// Parses the stored `type` column. Unknown values read as general.
    pub fn from_db(value: &str) -> Self {
        match value {
            "programming" => NoteKind::Programming,
            _ => NoteKind::General,
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single stored note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Identifier assigned by the store at insertion
    pub id: NoteId,

    /// Note body
    pub text: String,

    /// When the note was inserted
    pub created_at: DateTime<Utc>,

    /// General or programming
    pub kind: NoteKind,
}

/// Environment snapshot attached to programming notes.
///
/// All fields are free text. Collectors use [`NOT_AVAILABLE`] for values
/// they could not determine; general notes read back with empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgrammingMetadata {
    /// Working directory when the note was taken
    pub current_directory: String,

    /// Name of the most recently modified file under that directory
    pub last_edited_file: String,

    /// Checked-out git branch
    pub git_branch: String,

    /// HEAD commit hash
    pub git_commit_hash: String,
}

impl ProgrammingMetadata {
    /// A snapshot where nothing could be determined.
    pub fn unavailable() -> Self {
        Self {
            current_directory: NOT_AVAILABLE.to_string(),
            last_edited_file: NOT_AVAILABLE.to_string(),
            git_branch: NOT_AVAILABLE.to_string(),
            git_commit_hash: NOT_AVAILABLE.to_string(),
        }
    }

    /// True when every field is empty (the projection of a general note).
    pub fn is_empty(&self) -> bool {
        self.current_directory.is_empty()
            && self.last_edited_file.is_empty()
            && self.git_branch.is_empty()
            && self.git_commit_hash.is_empty()
    }
}

/// A note joined with its tags and metadata. Returned by every query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullNote {
    #[serde(flatten)]
    pub note: Note,

    /// Normalized tag names (no `#`)
    pub tags: BTreeSet<String>,

    /// Empty for general notes
    pub metadata: ProgrammingMetadata,
}

/// A named count produced by the statistics queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatItem {
    pub name: String,
    pub count: i64,
}

/// Normalizes a tag for storage and matching.
///
/// Surrounding whitespace and every leading `#` (including any whitespace
/// between them) are removed. Returns `None`
/// when nothing is left, so callers can skip empty tags instead of storing
/// or matching them.
pub fn normalize_tag(tag: &str) -> Option<&str> {
    let name = tag
        .trim()
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace());
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag_strips_hash() {
        assert_eq!(normalize_tag("#foo"), Some("foo"));
        assert_eq!(normalize_tag("foo"), Some("foo"));
    }

    #[test]
    fn test_normalize_tag_keeps_case() {
        assert_eq!(normalize_tag("#Rust"), Some("Rust"));
    }

    #[test]
    fn test_normalize_tag_is_idempotent() {
        for tag in [
            "#foo", "foo", "##foo", " #bar ", "#a#b", "#", "", "###", "# #foo", "#\t#foo",
        ] {
            let once = normalize_tag(tag);
            let twice = once.and_then(normalize_tag);
            assert_eq!(once, twice, "normalizing {tag:?} twice should match once");
        }
    }

    #[test]
    fn test_normalize_tag_rejects_empty() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("#"), None);
        assert_eq!(normalize_tag("  "), None);
        assert_eq!(normalize_tag("##"), None);
        assert_eq!(normalize_tag("# # "), None);
    }

    #[test]
    fn test_normalize_tag_strips_hashes_after_whitespace() {
        assert_eq!(normalize_tag("# #foo"), Some("foo"));
        assert_eq!(normalize_tag("#\t#foo"), Some("foo"));
        assert_eq!(normalize_tag("#a #b"), Some("a #b"));
    }

    #[test]
    fn test_note_kind_round_trip_through_db_value() {
        assert_eq!(NoteKind::from_db(NoteKind::General.as_str()), NoteKind::General);
        assert_eq!(
            NoteKind::from_db(NoteKind::Programming.as_str()),
            NoteKind::Programming
        );
        assert_eq!(NoteKind::from_db("something-else"), NoteKind::General);
    }

    #[test]
    fn test_default_metadata_is_empty() {
        assert!(ProgrammingMetadata::default().is_empty());
        assert!(!ProgrammingMetadata::unavailable().is_empty());
    }
}
