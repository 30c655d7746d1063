//! Repository acquisition
//!
//! Validates a forge locator and materialises the repository in a scoped
//! temporary directory. The directory is removed when the [`Checkout`] is
//! dropped, whichever way the request ends.

use crate::error::{GradeError, GradeResult};
use crate::git;
use regex::Regex;
use std::path::Path;
use tempfile::TempDir;
use tracing::{info, warn};

/// A validated `https://<host>/<owner>/<name>[.git]` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub host: String,
    pub owner: String,
    pub name: String,
    url: String,
}

impl Locator {
    /// Validate `url` against the accepted pattern for `host`.
    pub fn parse(url: &str, host: &str) -> GradeResult<Self> {
        let pattern = format!(
            r"^https://{}/([a-zA-Z0-9_-]+)/([a-zA-Z0-9_-]+)(\.git)?$",
            regex::escape(host)
        );
        let re = Regex::new(&pattern).map_err(|e| GradeError::InvalidLocator(e.to_string()))?;
        let caps = re
            .captures(url)
            .ok_or_else(|| GradeError::InvalidLocator(url.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            owner: caps[1].to_string(),
            name: caps[2].to_string(),
            url: url.to_string(),
        })
    }

    /// The locator exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Clone URL, optionally rewritten through a mirror prefix.
    ///
    /// A mirror of `https://mirror.example/` turns
    /// `https://github.com/o/r` into `https://mirror.example/github.com/o/r`.
    pub fn clone_url(&self, mirror: Option<&str>) -> String {
        match mirror {
            Some(prefix) => {
                let prefix = prefix.trim_end_matches('/');
                let rest = self.url.trim_start_matches("https://");
                format!("{}/{}", prefix, rest)
            }
            None => self.url.clone(),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// A checked-out repository whose directory lives as long as this value.
pub struct Checkout {
    dir: TempDir,
    /// False when the clone failed and the directory is empty
    pub cloned: bool,
}

impl Checkout {
    pub fn new(dir: TempDir, cloned: bool) -> Self {
        Self { dir, cloned }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Anything that can turn a locator into a local checkout.
pub trait RepoSource: Send + Sync {
    fn checkout(&self, locator: &Locator) -> GradeResult<Checkout>;
}

/// Clones over the network with the system `git`.
#[derive(Debug, Clone, Default)]
pub struct GitCloneSource {
    mirror: Option<String>,
}

impl GitCloneSource {
    pub fn new(mirror: Option<String>) -> Self {
        Self { mirror }
    }
}

impl RepoSource for GitCloneSource {
    fn checkout(&self, locator: &Locator) -> GradeResult<Checkout> {
        let dir = tempfile::Builder::new()
            .prefix("repograde-")
            .tempdir()
            .map_err(|e| GradeError::Acquisition(format!("temporary directory: {}", e)))?;

        let url = locator.clone_url(self.mirror.as_deref());
        // A failed clone degrades to an empty summary instead of aborting
        let cloned = match git::clone_into(&url, dir.path()) {
            Ok(()) => {
                info!("Cloned {} to {:?}", locator, dir.path());
                true
            }
            Err(e) => {
                warn!("Clone of {} failed, continuing with empty checkout: {:#}", locator, e);
                false
            }
        };

        Ok(Checkout::new(dir, cloned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_is_optional() {
        let plain = Locator::parse("https://forge.example/owner/repo", "forge.example").unwrap();
        let dotted =
            Locator::parse("https://forge.example/owner/repo.git", "forge.example").unwrap();
        assert_eq!(plain.owner, dotted.owner);
        assert_eq!(plain.name, "repo");
        assert_eq!(dotted.name, "repo");
    }

    #[test]
    fn test_rejects_other_shapes() {
        let host = "github.com";
        for bad in [
            "http://github.com/o/r",
            "https://gitlab.com/o/r",
            "https://github.com/o",
            "https://github.com/o/r/tree/main",
            "https://github.com/o/r.git/",
            "https://github.com/o w/r",
            "https://githubXcom/o/r",
            "",
        ] {
            let err = Locator::parse(bad, host).unwrap_err();
            assert!(matches!(err, GradeError::InvalidLocator(_)), "{bad}");
        }
    }

    #[test]
    fn test_host_is_escaped() {
        // The dot in the host must not match arbitrary characters
        assert!(Locator::parse("https://forgeXexample/o/r", "forge.example").is_err());
    }

    #[test]
    fn test_mirror_rewrite() {
        let loc = Locator::parse("https://github.com/vra/flopth", "github.com").unwrap();
        assert_eq!(loc.clone_url(None), "https://github.com/vra/flopth");
        assert_eq!(
            loc.clone_url(Some("https://gitclone.com/")),
            "https://gitclone.com/github.com/vra/flopth"
        );
    }

    #[test]
    fn test_checkout_directory_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_path_buf();
        let checkout = Checkout::new(dir, false);
        assert!(checkout.path().exists());
        drop(checkout);
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_clone_yields_empty_checkout() {
        let source = GitCloneSource::new(Some("file:///nonexistent-mirror".to_string()));
        let loc = Locator::parse("https://github.com/o/r", "github.com").unwrap();
        let checkout = source.checkout(&loc).unwrap();
        assert!(!checkout.cloned);
        assert_eq!(std::fs::read_dir(checkout.path()).unwrap().count(), 0);
    }
}
