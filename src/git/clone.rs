//! Repository cloning through the system `git` binary

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Clone `url` into the existing, empty directory `dest`.
pub fn clone_into(url: &str, dest: &Path) -> Result<()> {
    // Reject values that git would parse as flags
    if url.starts_with('-') {
        anyhow::bail!("Refusing to clone '{}': looks like a flag", url);
    }

    debug!("git clone {} -> {:?}", url, dest);
    let output = Command::new("git")
        .args(["clone", "--quiet", "--", url])
        .arg(dest)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .with_context(|| format!("Failed to run git clone for '{}'", url))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git clone failed: {}", stderr.trim());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_like_url_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = clone_into("--upload-pack=evil", dir.path()).unwrap_err();
        assert!(err.to_string().contains("looks like a flag"));
    }

    #[test]
    fn test_clone_local_repository() {
        let src = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(src.path()).unwrap();
        std::fs::write(src.path().join("a.txt"), "hello\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("a.txt")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = git2::Signature::now("Dev", "dev@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "add a", &tree, &[])
            .unwrap();

        let dest = tempfile::tempdir().unwrap();
        let url = src.path().to_string_lossy().to_string();
        // Skip quietly on hosts without a git binary
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        clone_into(&url, dest.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(dest.path().join("a.txt")).unwrap(),
            "hello\n"
        );
    }
}
