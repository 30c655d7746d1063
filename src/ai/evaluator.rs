use super::client::{AiClient, Message};
use super::prompts::SYSTEM_PROMPT;
use crate::error::GradeResult;
use tracing::debug;

/// A text-in, text-out judge.
///
/// One call per evaluation, no retries. Transport failures come back as
/// `GradeError::EvaluationUnavailable`.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, prompt: &str) -> GradeResult<String>;
}

impl Evaluator for AiClient {
    fn evaluate(&self, prompt: &str) -> GradeResult<String> {
        debug!(
            "Evaluating with {} ({}), {} prompt bytes",
            self.backend().display_name(),
            self.model(),
            prompt.len()
        );
        let reply = self.generate(vec![Message::user(prompt)], Some(SYSTEM_PROMPT))?;
        Ok(reply)
    }
}
