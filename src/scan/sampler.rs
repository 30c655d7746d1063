//! Bounded random sampling of source files
//!
//! Picks at most [`MAX_SAMPLES`] files without replacement and keeps the
//! first [`MAX_EXCERPT_LINES`] lines of each. The random source is a
//! parameter so callers can pin the selection.

use super::walker::display_path;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MAX_SAMPLES: usize = 10;
pub const MAX_EXCERPT_LINES: usize = 100;

/// The leading lines of one sampled file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExcerpt {
    /// Root-relative path
    pub path: String,
    pub text: String,
}

/// Result of one sampling pass.
#[derive(Debug, Clone, Default)]
pub struct SampleOutcome {
    pub excerpts: Vec<CodeExcerpt>,
    /// Selected files dropped because they were unreadable or not UTF-8
    pub skipped: Vec<String>,
}

/// Sample up to [`MAX_SAMPLES`] of `files` and excerpt each.
///
/// Files that fail to decode are dropped without a replacement draw, so the
/// excerpt count can fall below the sample size.
pub fn sample_sources<R: Rng + ?Sized>(root: &Path, files: &[PathBuf], rng: &mut R) -> SampleOutcome {
    let amount = files.len().min(MAX_SAMPLES);
    let mut outcome = SampleOutcome::default();

    for index in rand::seq::index::sample(rng, files.len(), amount) {
        let path = &files[index];
        let shown = display_path(root, path);
        match read_excerpt(path) {
            Some(text) => outcome.excerpts.push(CodeExcerpt { path: shown, text }),
            None => {
                debug!("Skipping undecodable sample {}", shown);
                outcome.skipped.push(shown);
            }
        }
    }

    outcome
}

/// Read up to [`MAX_EXCERPT_LINES`] lines, keeping line terminators.
fn read_excerpt(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();

    for _ in 0..MAX_EXCERPT_LINES {
        // read_line rejects invalid UTF-8 with InvalidData
        match reader.read_line(&mut text) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(text)
}
