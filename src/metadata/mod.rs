//! Environment snapshot for programming notes.
//!
//! Collects the working directory, the most recently edited file beneath it,
//! and the git branch and HEAD commit. Anything that cannot be determined is
//! recorded as [`NOT_AVAILABLE`].

use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::git;
use crate::storage::models::{ProgrammingMetadata, NOT_AVAILABLE};

/// Collects metadata for the current working directory.
pub fn collect_metadata() -> ProgrammingMetadata {
    match std::env::current_dir() {
        Ok(dir) => collect_metadata_for(&dir),
        Err(e) => {
            tracing::warn!("Could not determine current directory: {}", e);
            ProgrammingMetadata::unavailable()
        }
    }
}

/// Collects metadata for `dir`.
pub fn collect_metadata_for(dir: &Path) -> ProgrammingMetadata {
    let (git_branch, git_commit_hash) = match git::repo_info(dir) {
        Ok(info) => (
            info.branch.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            info.commit_sha.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        Err(e) => {
            tracing::debug!("No git information for {:?}: {}", dir, e);
            (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
        }
    };

    ProgrammingMetadata {
        current_directory: dir.to_string_lossy().to_string(),
        last_edited_file: last_edited_file(dir).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        git_branch,
        git_commit_hash,
    }
}

/// Finds the most recently modified regular file under `dir`.
///
/// Returns only the file name. Anything inside a `.git` directory is ignored,
/// as are entries that cannot be read.
pub fn last_edited_file(dir: &Path) -> Option<String> {
    let mut latest: Option<(SystemTime, String)> = None;

    let entries = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("Skipping unreadable entry: {}", err);
                None
            }
        });

    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(modified) = entry.metadata().ok().and_then(|m| m.modified().ok()) else {
            continue;
        };
        if latest.as_ref().map_or(true, |(time, _)| modified > *time) {
            latest = Some((modified, entry.file_name().to_string_lossy().to_string()));
        }
    }

    latest.map(|(_, name)| name)
}
