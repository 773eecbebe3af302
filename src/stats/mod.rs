//! Aggregate statistics over the note store.

use serde::Serialize;

use crate::storage::{NoteRepository, StatItem};

/// All statistics shown by `ink stats`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AppStats {
    pub total_notes: i64,
    /// Tags by usage, most used first
    pub top_tags: Vec<StatItem>,
    /// Programming-note directories, busiest first
    pub notes_per_project: Vec<StatItem>,
    /// Notes per day, most recent first
    pub notes_per_day: Vec<StatItem>,
}

impl AppStats {
    /// Keeps the first `top` tags and projects and the first `days` days.
    pub fn truncated(mut self, top: usize, days: usize) -> Self {
        self.top_tags.truncate(top);
        self.notes_per_project.truncate(top);
        self.notes_per_day.truncate(days);
        self
    }
}

/// Gathers every aggregation from the store.
pub fn gather(repo: &dyn NoteRepository) -> AppStats {
    AppStats {
        total_notes: repo.total_note_count(),
        top_tags: repo.tag_usage_counts(),
        notes_per_project: repo.project_counts(),
        notes_per_day: repo.daily_counts(),
    }
}
