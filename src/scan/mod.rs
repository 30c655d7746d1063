//! Filesystem heuristics over a checked-out repository
//!
//! - [`classify`]: extension allowlist and null-byte sniff
//! - [`walker`]: one traversal producing counts and listings
//! - [`sampler`]: bounded random excerpts of source files
//! - [`size`]: `du`-style size strings

pub mod classify;
pub mod sampler;
pub mod size;
pub mod walker;

pub use classify::{is_binary_file, is_source_file};
pub use sampler::{sample_sources, CodeExcerpt, SampleOutcome, MAX_EXCERPT_LINES, MAX_SAMPLES};
pub use size::human_size;
pub use walker::{walk_repository, RepoInventory};
