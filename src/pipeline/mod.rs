//! End-to-end grading pipeline
//!
//! ```text
//! locator ──> RepoSource ──> gather_summary ──> Evaluator ──> parse ──> aggregate
//! ```
//!
//! Every stage runs on the calling thread. The checkout is dropped (and its
//! directory deleted) before the result is returned, on success and failure
//! alike.

use crate::acquire::{Locator, RepoSource};
use crate::ai::{build_prompt, parse_evaluation, CategoryScore, Evaluator};
use crate::error::{GradeError, GradeResult};
use crate::scoring::{score_card, ScoreCard};
use crate::summary::{gather_summary, RepositorySummary};
use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Response body shared by the HTTP service and `score --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub comment: String,
    pub detail: IndexMap<String, CategoryScore>,
    pub description: String,
}

impl From<ScoreCard> for ScoreResponse {
    fn from(card: ScoreCard) -> Self {
        Self {
            score: card.record.overall_score,
            comment: card.comment,
            detail: card.record.categories,
            description: card.record.advice,
        }
    }
}

/// Send a summary to the evaluator and turn its reply into a score card.
pub fn evaluate_summary<R: Rng + ?Sized>(
    evaluator: &dyn Evaluator,
    summary: &RepositorySummary,
    rng: &mut R,
) -> GradeResult<ScoreCard> {
    let prompt = build_prompt(summary);
    let reply = evaluator.evaluate(&prompt)?;
    debug!("Raw evaluation: {}", reply);

    let raw = parse_evaluation(&reply)?;
    let card = score_card(raw, rng)?;
    info!(
        "Overall score {:.2} across {} categories",
        card.record.overall_score,
        card.record.categories.len()
    );
    Ok(card)
}

/// Owns the long-lived collaborators of one service instance.
#[derive(Clone)]
pub struct Grader {
    evaluator: Arc<dyn Evaluator>,
    source: Arc<dyn RepoSource>,
    forge_host: String,
}

impl Grader {
    pub fn new(
        evaluator: Arc<dyn Evaluator>,
        source: Arc<dyn RepoSource>,
        forge_host: impl Into<String>,
    ) -> Self {
        Self {
            evaluator,
            source,
            forge_host: forge_host.into(),
        }
    }

    pub fn forge_host(&self) -> &str {
        &self.forge_host
    }

    /// Validate a raw locator string.
    pub fn locate(&self, url: Option<&str>) -> GradeResult<Locator> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(GradeError::MissingLocator)?;
        Locator::parse(url, &self.forge_host)
    }

    /// Grade the repository at `url` with a fresh thread-local RNG.
    pub fn grade(&self, url: Option<&str>) -> GradeResult<ScoreCard> {
        self.grade_with_rng(url, &mut rand::rng())
    }

    /// Grade with an explicit random source for sampling and commentary.
    pub fn grade_with_rng<R: Rng + ?Sized>(&self, url: Option<&str>, rng: &mut R) -> GradeResult<ScoreCard> {
        let locator = self.locate(url)?;
        let checkout = self.source.checkout(&locator)?;
        info!("Generating summary for {}", locator);

        let summary = gather_summary(checkout.path(), rng);
        let result = evaluate_summary(self.evaluator.as_ref(), &summary, rng);

        drop(checkout);
        result
    }
}
