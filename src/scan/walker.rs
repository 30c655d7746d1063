//! Single-pass repository inventory
//!
//! One traversal yields the file count, the binary and test listings, the
//! source candidates for sampling, and the on-disk byte total.

use super::classify::{is_binary_file, is_source_file};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory names owned by a version-control system.
pub const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// The README is summarised as prose, never sampled as code.
const README_NAME: &str = "README.md";

/// Everything the walker learned about a repository tree.
#[derive(Debug, Clone, Default)]
pub struct RepoInventory {
    /// Regular files outside version-control internals
    pub total_file_count: usize,
    /// Root-relative paths of binary files (outside version-control internals)
    pub binary_files: Vec<String>,
    /// Root-relative paths containing "test" that are not binary
    pub test_files: Vec<String>,
    /// Absolute paths of source-code files, README.md excluded
    pub source_files: Vec<PathBuf>,
    /// Files the binary sniff could not read; left out of both listings
    pub unreadable: Vec<String>,
    /// Apparent size of every regular file, version-control internals included
    pub total_bytes: u64,
}

/// True if any component of `rel` is a version-control directory.
pub fn in_vcs_dir(rel: &Path) -> bool {
    rel.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|n| VCS_DIRS.contains(&n)),
        _ => false,
    })
}

/// Render a path relative to `root` with forward slashes.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk `root` once and classify every regular file.
///
/// Hidden files and ignore rules are not honoured: the inventory describes
/// what is committed, including what the ignore file should have excluded.
pub fn walk_repository(root: &Path) -> RepoInventory {
    walk_with_sniff(root, is_binary_file)
}

/// The walk itself, with the binary sniff supplied by the caller.
fn walk_with_sniff<F>(root: &Path, sniff: F) -> RepoInventory
where
    F: Fn(&Path) -> io::Result<bool>,
{
    let mut inventory = RepoInventory::default();

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unwalkable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if let Ok(meta) = entry.metadata() {
            inventory.total_bytes += meta.len();
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if in_vcs_dir(rel) {
            continue;
        }

        inventory.total_file_count += 1;
        let shown = display_path(root, path);

        let name = entry.file_name().to_string_lossy();
        if name != README_NAME && is_source_file(&name) {
            inventory.source_files.push(path.to_path_buf());
        }

        let binary = match sniff(path) {
            Ok(binary) => binary,
            Err(e) => {
                debug!("Binary sniff failed for {}: {}", shown, e);
                inventory.unreadable.push(shown);
                continue;
            }
        };

        if binary {
            inventory.binary_files.push(shown);
        } else if shown.contains("test") {
            inventory.test_files.push(shown);
        }
    }

    debug!(
        "Inventory: {} files, {} source, {} test, {} binary, {} unreadable",
        inventory.total_file_count,
        inventory.source_files.len(),
        inventory.test_files.len(),
        inventory.binary_files.len(),
        inventory.unreadable.len()
    );

    inventory
}
