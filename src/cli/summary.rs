//! Summary command - print what the evaluator would see

use anyhow::{Context, Result};
use repograde::summary::gather_summary;
use std::path::Path;

pub fn run(path: &Path, seed: Option<u64>) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let summary = gather_summary(&root, &mut super::make_rng(seed));
    println!("{}", summary.render());
    Ok(())
}
