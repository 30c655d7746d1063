//! Git access
//!
//! History is read through libgit2; cloning shells out to `git` so that
//! transport support (https, credentials helpers, proxies) matches the host.

pub mod clone;
pub mod history;

pub use clone::clone_into;
pub use history::{commit_subjects_or_empty, GitHistory};
