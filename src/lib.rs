//! Repograde - LLM-judged repository hygiene scores
//!
//! A checkout is reduced to a fixed-shape text summary (README, LICENSE,
//! ignore rules, commit subjects, sampled code, test and binary paths,
//! size, file count), sent to an LLM evaluator with scoring instructions,
//! and the reply is parsed into per-category scores with an overall mean.

pub mod acquire;
pub mod ai;
pub mod config;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod scan;
pub mod scoring;
pub mod server;
pub mod summary;

pub use error::{GradeError, GradeResult};
