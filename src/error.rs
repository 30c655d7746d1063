//! Error taxonomy for the grading pipeline
//!
//! File-level problems (`Read`) are normally absorbed where they happen and
//! surface as skipped paths. Everything else propagates to the caller as a
//! request-level failure.

use crate::ai::AiError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Repository could not be acquired: {0}")]
    Acquisition(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Evaluator unavailable: {0}")]
    EvaluationUnavailable(#[from] AiError),

    #[error("Malformed evaluation: {0}")]
    MalformedEvaluation(String),

    #[error("Invalid score for category '{category}': {value}")]
    InvalidScore { category: String, value: String },

    #[error("Invalid repository locator: {0}")]
    InvalidLocator(String),

    #[error("Missing repository locator")]
    MissingLocator,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GradeError {
    /// True for errors caused by the caller's input rather than by the
    /// pipeline or its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GradeError::InvalidLocator(_) | GradeError::MissingLocator)
    }
}

pub type GradeResult<T> = Result<T, GradeError>;
