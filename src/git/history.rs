//! Commit history extraction using libgit2

use anyhow::{Context, Result};
use git2::{Repository, Sort};
use std::path::Path;
use tracing::{debug, warn};

/// Read-only view of a repository's history.
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open the repository rooted at `path`. Parent directories are not searched.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open git repository at {:?}", path))?;
        debug!("Opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Subject line of every commit reachable from HEAD, newest first.
    pub fn commit_subjects(&self) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head().context("Repository has no HEAD")?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            subjects.push(commit.summary().unwrap_or_default().to_string());
        }

        Ok(subjects)
    }
}

/// Commit subjects for `path`, or an empty list when history is unavailable.
pub fn commit_subjects_or_empty(path: &Path) -> Vec<String> {
    match GitHistory::open(path).and_then(|h| h.commit_subjects()) {
        Ok(subjects) => subjects,
        Err(e) => {
            warn!("Commit history unavailable, leaving it empty: {:#}", e);
            Vec::new()
        }
    }
}
