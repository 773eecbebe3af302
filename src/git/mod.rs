//! Git integration.
//!
//! Provides repository discovery and the branch/HEAD lookup used when
//! capturing programming notes.

use anyhow::{Context, Result};
use std::path::Path;

/// Information about a git repository.
///
/// Contains the state of the repository enclosing a path.
#[derive(Debug)]
pub struct RepoInfo {
    /// Current branch name, if HEAD points to a branch.
    pub branch: Option<String>,
    /// SHA of the current HEAD commit.
    pub commit_sha: Option<String>,
}

/// Retrieves information about a git repository.
///
/// Discovers the repository containing the given path (walking up parent
/// directories) and extracts branch and commit information.
///
/// # Errors
///
/// Returns an error if the path is not inside a git repository.
pub fn repo_info(path: &Path) -> Result<RepoInfo> {
    let repo = git2::Repository::discover(path).context("Not a git repository")?;

    let head = repo.head().ok();
    let branch = head
        .as_ref()
        .and_then(|h| h.shorthand())
        .map(|s| s.to_string());

    let commit_sha = head
        .and_then(|h| h.peel_to_commit().ok())
        .map(|c| c.id().to_string());

    Ok(RepoInfo {
        branch,
        commit_sha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_repo_info_outside_repository() {
        let dir = tempdir().expect("Failed to create temp directory");
        // tempdir is normally not inside a repository; skip if it is.
        if git2::Repository::discover(dir.path()).is_ok() {
            return;
        }
        assert!(repo_info(dir.path()).is_err());
    }

    #[test]
    fn test_repo_info_reads_branch_and_commit() {
        let dir = tempdir().expect("Failed to create temp directory");
        let repo = git2::Repository::init(dir.path()).expect("init repo");

        let sig = git2::Signature::now("Test", "test@example.com").expect("signature");
        let tree_id = repo
            .index()
            .and_then(|mut index| index.write_tree())
            .expect("write tree");
        let tree = repo.find_tree(tree_id).expect("find tree");
        let commit_id = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .expect("commit");

        let info = repo_info(dir.path()).expect("repo info");
        assert_eq!(info.commit_sha, Some(commit_id.to_string()));
        assert!(info.branch.is_some(), "HEAD should point at a branch");
    }

    #[test]
    fn test_repo_info_without_commits_has_no_sha() {
        let dir = tempdir().expect("Failed to create temp directory");
        git2::Repository::init(dir.path()).expect("init repo");

        let info = repo_info(dir.path()).expect("repo info");
        assert!(info.commit_sha.is_none());
    }
}
