use super::RepositorySummary;
use crate::git::commit_subjects_or_empty;
use crate::scan::{human_size, sample_sources, walk_repository};
use rand::Rng;
use std::path::Path;
use tracing::{debug, info, warn};

/// Collect every summary field from a checkout at `root`.
///
/// Missing or undecodable README/LICENSE/ignore files become empty
/// sections; so does unavailable history. Nothing here fails the request.
pub fn gather_summary<R: Rng + ?Sized>(root: &Path, rng: &mut R) -> RepositorySummary {
    let inventory = walk_repository(root);
    let sample = sample_sources(root, &inventory.source_files, rng);

    if !sample.skipped.is_empty() {
        debug!("Skipped {} undecodable samples: {:?}", sample.skipped.len(), sample.skipped);
    }
    if !inventory.unreadable.is_empty() {
        warn!("{} files could not be sniffed and were left out", inventory.unreadable.len());
    }

    let summary = RepositorySummary {
        readme: read_optional(root, "README.md"),
        license: read_optional(root, "LICENSE"),
        ignore_rules: read_optional(root, ".gitignore"),
        commit_subjects: commit_subjects_or_empty(root),
        code_excerpts: sample.excerpts,
        test_file_paths: inventory.test_files,
        binary_file_paths: inventory.binary_files,
        total_file_count: inventory.total_file_count,
        repo_size_human: human_size(inventory.total_bytes),
    };

    info!(
        "Summary: {} files, {} excerpts, {} tests, {} binaries, {} commits, {}",
        summary.total_file_count,
        summary.code_excerpts.len(),
        summary.test_file_paths.len(),
        summary.binary_file_paths.len(),
        summary.commit_subjects.len(),
        summary.repo_size_human
    );

    summary
}

fn read_optional(root: &Path, name: &str) -> String {
    let path = root.join(name);
    if !path.is_file() {
        return String::new();
    }
    match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read {}: {}", name, e);
            String::new()
        }
    }
}
