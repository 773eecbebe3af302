//! SQLite storage layer for Den Den Ink

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, Transaction};
use std::collections::BTreeSet;
use std::path::Path;

use super::error::{StorageError, StorageResult};
use super::models::{
    normalize_tag, FullNote, Note, NoteId, NoteKind, ProgrammingMetadata, StatItem,
};
use super::NoteRepository;
use crate::config::Config;

const SCHEMA: &str = r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
        type TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        note_id INTEGER NOT NULL,
        tag_name TEXT NOT NULL,
        FOREIGN KEY (note_id) REFERENCES notes(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS metadata (
        note_id INTEGER PRIMARY KEY,
        current_directory TEXT,
        last_edited_file TEXT,
        git_branch TEXT,
        recent_commit_hash TEXT,
        FOREIGN KEY (note_id) REFERENCES notes(id) ON DELETE CASCADE
    );

    -- Indexes for common queries
    CREATE INDEX IF NOT EXISTS idx_notes_timestamp ON notes(timestamp);
    CREATE INDEX IF NOT EXISTS idx_tags_note_id ON tags(note_id);
    CREATE INDEX IF NOT EXISTS idx_tags_tag_name ON tags(tag_name);
"#;

const NOTE_COLUMNS: &str = "SELECT id, text, timestamp, type FROM notes";

const TOTAL_NOTES_SQL: &str = "SELECT COUNT(*) FROM notes";

const TAG_COUNTS_SQL: &str = "SELECT tag_name, COUNT(*) AS uses
     FROM tags
     GROUP BY tag_name
     ORDER BY uses DESC, tag_name ASC";

const PROJECT_COUNTS_SQL: &str = "SELECT COALESCE(current_directory, ''), COUNT(*) AS notes
     FROM metadata
     GROUP BY current_directory
     ORDER BY notes DESC, current_directory ASC";

const DAILY_COUNTS_SQL: &str = "SELECT date(timestamp) AS day, COUNT(*)
     FROM notes
     GROUP BY day
     ORDER BY day DESC";

/// Which notes a read query selects.
enum NoteFilter<'a> {
    Recent { limit: usize },
    Tag(&'a str),
    Search { query: &'a str, tags: BTreeSet<&'a str> },
}

impl NoteFilter<'_> {
    /// Builds the note-selecting subquery and its bound values.
    fn to_sql(&self) -> (String, Vec<Value>) {
        match self {
            NoteFilter::Recent { limit } => (
                format!("{NOTE_COLUMNS} ORDER BY timestamp DESC, id DESC LIMIT ?1"),
                vec![Value::Integer(i64::try_from(*limit).unwrap_or(i64::MAX))],
            ),
            NoteFilter::Tag(name) => (
                format!("{NOTE_COLUMNS} WHERE id IN (SELECT note_id FROM tags WHERE tag_name = ?1)"),
                vec![Value::Text(name.to_string())],
            ),
            NoteFilter::Search { query, tags } => {
                // instr() rather than LIKE: LIKE ignores ASCII case.
                let mut sql = format!("{NOTE_COLUMNS} WHERE instr(text, ?1) > 0");
                let mut values = vec![Value::Text(query.to_string())];

                if !tags.is_empty() {
                    let placeholders: Vec<String> =
                        (0..tags.len()).map(|i| format!("?{}", i + 2)).collect();
                    sql.push_str(&format!(
                        " AND id IN (SELECT note_id FROM tags WHERE tag_name IN ({}) \
                         GROUP BY note_id HAVING COUNT(DISTINCT tag_name) = {})",
                        placeholders.join(", "),
                        tags.len()
                    ));
                    values.extend(tags.iter().map(|t| Value::Text(t.to_string())));
                }

                (sql, values)
            }
        }
    }
}

/// One row of the note/metadata/tag join.
type JoinedRow = (Note, ProgrammingMetadata, Option<String>);

/// Database connection wrapper
///
/// Owns the only connection to the store. The connection is closed when the
/// value is dropped.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the store and make sure its schema exists.
    ///
    /// Safe to call on an already initialized file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Init`] if the file cannot be opened or the
    /// schema statements fail. The connection is closed before returning.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::Init {
            path: path.to_path_buf(),
            source,
        })?;

        if let Err(source) = conn.execute_batch(SCHEMA) {
            if let Err((_, close_err)) = conn.close() {
                tracing::warn!("Failed to close note store after schema error: {}", close_err);
            }
            return Err(StorageError::Init {
                path: path.to_path_buf(),
                source,
            });
        }

        tracing::debug!("Opened note store at {:?}", path);
        Ok(Self { conn })
    }

    /// Open the store at the configured location.
    pub fn open_default(config: &Config) -> anyhow::Result<Self> {
        let path = config.db_path()?;
        Ok(Self::open(&path)?)
    }

    // ==================== Writes ====================

    fn insert_note(
        &mut self,
        kind: NoteKind,
        text: &str,
        tags: &[String],
        metadata: Option<&ProgrammingMetadata>,
    ) -> StorageResult<NoteId> {
        let tx = self.conn.transaction().map_err(StorageError::Transaction)?;

        match Self::write_note(&tx, kind, text, tags, metadata) {
            Ok(note_id) => {
                tx.commit().map_err(StorageError::Transaction)?;
                tracing::debug!("Saved {} note {} with {} tag(s)", kind, note_id, tags.len());
                Ok(note_id)
            }
            Err(err) => {
                tracing::warn!("Rolling back {} note: {}", kind, err);
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!("Rollback failed: {}", rollback_err);
                }
                Err(StorageError::Transaction(err))
            }
        }
    }

    fn write_note(
        tx: &Transaction,
        kind: NoteKind,
        text: &str,
        tags: &[String],
        metadata: Option<&ProgrammingMetadata>,
    ) -> rusqlite::Result<NoteId> {
        tx.execute(
            "INSERT INTO notes (text, type) VALUES (?1, ?2)",
            params![text, kind.as_str()],
        )?;
        let note_id = tx.last_insert_rowid();

        let mut insert_tag =
            tx.prepare("INSERT INTO tags (note_id, tag_name) VALUES (?1, ?2)")?;
        for tag in tags {
            match normalize_tag(tag) {
                Some(name) => {
                    insert_tag.execute(params![note_id, name])?;
                }
                None => tracing::debug!("Skipping empty tag {:?}", tag),
            }
        }

        if let Some(meta) = metadata {
            tx.execute(
                r#"
                INSERT INTO metadata (note_id, current_directory, last_edited_file, git_branch, recent_commit_hash)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    note_id,
                    meta.current_directory,
                    meta.last_edited_file,
                    meta.git_branch,
                    meta.git_commit_hash,
                ],
            )?;
        }

        Ok(note_id)
    }

    // ==================== Reads ====================

    fn query_full_notes(&self, filter: &NoteFilter) -> StorageResult<Vec<FullNote>> {
        let (selected, values) = filter.to_sql();
        let sql = format!(
            "SELECT n.id, n.text, n.timestamp, n.type,
                    m.current_directory, m.last_edited_file, m.git_branch, m.recent_commit_hash,
                    t.tag_name
             FROM ({selected}) AS n
             LEFT JOIN metadata m ON m.note_id = n.id
             LEFT JOIN tags t ON t.note_id = n.id
             ORDER BY n.timestamp DESC, n.id DESC, t.id ASC"
        );

        let mut stmt = self.conn.prepare(&sql).map_err(StorageError::Query)?;
        let rows = stmt
            .query_map(params_from_iter(values), Self::row_to_joined)
            .map_err(StorageError::Query)?;

        // Rows of one note are adjacent because the ordering is by note first.
        let mut notes: Vec<FullNote> = Vec::new();
        for row in rows {
            let (note, metadata, tag) = row.map_err(StorageError::Query)?;
            match notes.last_mut() {
                Some(last) if last.note.id == note.id => {
                    if let Some(tag) = tag {
                        last.tags.insert(tag);
                    }
                }
                _ => notes.push(FullNote {
                    note,
                    tags: tag.into_iter().collect(),
                    metadata,
                }),
            }
        }

        Ok(notes)
    }

    fn row_to_joined(row: &rusqlite::Row) -> rusqlite::Result<JoinedRow> {
        let timestamp: String = row.get(2)?;
        let created_at = parse_timestamp(&timestamp)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        let kind: String = row.get(3)?;

        let note = Note {
            id: row.get(0)?,
            text: row.get(1)?,
            created_at,
            kind: NoteKind::from_db(&kind),
        };
        let metadata = ProgrammingMetadata {
            current_directory: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            last_edited_file: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            git_branch: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            git_commit_hash: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        };

        Ok((note, metadata, row.get(8)?))
    }

    // ==================== Stats ====================

    fn query_total_notes(&self) -> StorageResult<i64> {
        self.conn
            .query_row(TOTAL_NOTES_SQL, [], |row| row.get(0))
            .map_err(StorageError::Query)
    }

    fn query_stat_items(&self, sql: &str) -> StorageResult<Vec<StatItem>> {
        let mut stmt = self.conn.prepare(sql).map_err(StorageError::Query)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StatItem {
                    name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    count: row.get(1)?,
                })
            })
            .map_err(StorageError::Query)?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::Query)
    }
}

impl NoteRepository for Database {
    fn add_general_note(&mut self, text: &str, tags: &[String]) -> StorageResult<NoteId> {
        self.insert_note(NoteKind::General, text, tags, None)
    }

    fn add_programming_note(
        &mut self,
        text: &str,
        tags: &[String],
        metadata: &ProgrammingMetadata,
    ) -> StorageResult<NoteId> {
        self.insert_note(NoteKind::Programming, text, tags, Some(metadata))
    }

    fn list_recent(&self, limit: usize) -> Vec<FullNote> {
        fail_soft("list_recent", self.query_full_notes(&NoteFilter::Recent { limit }))
    }

    fn list_by_tag(&self, tag: &str) -> Vec<FullNote> {
        match normalize_tag(tag) {
            Some(name) => fail_soft("list_by_tag", self.query_full_notes(&NoteFilter::Tag(name))),
            None => Vec::new(),
        }
    }

    fn search(&self, query: &str, tags: &[String]) -> Vec<FullNote> {
        // An empty filter tag can never be carried, so nothing matches.
        let tags: Option<BTreeSet<&str>> = tags.iter().map(|t| normalize_tag(t)).collect();
        let Some(tags) = tags else {
            return Vec::new();
        };
        fail_soft("search", self.query_full_notes(&NoteFilter::Search { query, tags }))
    }

    fn total_note_count(&self) -> i64 {
        fail_soft("total_note_count", self.query_total_notes())
    }

    fn tag_usage_counts(&self) -> Vec<StatItem> {
        fail_soft("tag_usage_counts", self.query_stat_items(TAG_COUNTS_SQL))
    }

    fn project_counts(&self) -> Vec<StatItem> {
        fail_soft("project_counts", self.query_stat_items(PROJECT_COUNTS_SQL))
    }

    fn daily_counts(&self) -> Vec<StatItem> {
        fail_soft("daily_counts", self.query_stat_items(DAILY_COUNTS_SQL))
    }
}

/// Logs a failed read and substitutes an empty result.
fn fail_soft<T: Default>(operation: &str, result: StorageResult<T>) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!("{} failed, returning no results: {}", operation, err);
        T::default()
    })
}

/// Parses SQLite's `CURRENT_TIMESTAMP` format (UTC, optional fraction).
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").map(|t| t.and_utc())
}
