//! LLM evaluation
//!
//! The evaluator receives a fixed instructional preamble followed by the
//! repository summary and answers with free-form text, which [`parse`]
//! turns into per-category scores.
//!
//! # Environment Variables
//!
//! - `API_KEY`: credential for whichever backend is configured
//! - `ZHIPUAI_API_KEY`, `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`,
//!   `DEEPINFRA_API_KEY`, `OPENROUTER_API_KEY`: backend-specific keys
//!
//! # Example
//!
//! ```rust,ignore
//! use repograde::ai::{AiClient, Evaluator, LlmBackend};
//!
//! let client = AiClient::from_env(LlmBackend::Zhipu)?;
//! let reply = client.evaluate(&repograde::ai::build_prompt(&summary))?;
//! let record = repograde::ai::parse_evaluation(&reply)?;
//! ```

mod client;
mod evaluator;
pub mod parse;
mod prompts;

pub use client::{AiClient, AiConfig, LlmBackend, Message, Role};
pub use evaluator::Evaluator;
pub use parse::{parse_evaluation, strip_fences, CategoryScore, RawEvaluation};
pub use prompts::{build_prompt, CATEGORY_NAMES, PREAMBLE, SYSTEM_PROMPT};

use thiserror::Error;

/// Errors raised by the LLM transport
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Missing API key: {env_var} not set. Get your key at {signup_url}")]
    MissingApiKey { env_var: String, signup_url: String },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type AiResult<T> = Result<T, AiError>;
