//! LLM API client
//!
//! One request shape per provider family (OpenAI-compatible chat
//! completions, Anthropic messages). The backend is fixed when the client
//! is built. Uses ureq (sync HTTP) so the pipeline stays single-threaded.

use crate::ai::{AiError, AiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Generic credential variable consulted after the backend-specific one.
pub const GENERIC_KEY_ENV: &str = "API_KEY";

/// Supported LLM backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmBackend {
    #[default]
    Zhipu,
    OpenAi,
    Anthropic,
    Deepinfra,
    OpenRouter,
    Ollama,
}

impl LlmBackend {
    pub fn env_key(&self) -> &'static str {
        match self {
            LlmBackend::Zhipu => "ZHIPUAI_API_KEY",
            LlmBackend::OpenAi => "OPENAI_API_KEY",
            LlmBackend::Anthropic => "ANTHROPIC_API_KEY",
            LlmBackend::Deepinfra => "DEEPINFRA_API_KEY",
            LlmBackend::OpenRouter => "OPENROUTER_API_KEY",
            LlmBackend::Ollama => "OLLAMA_MODEL",
        }
    }

    pub fn signup_url(&self) -> &'static str {
        match self {
            LlmBackend::Zhipu => "https://open.bigmodel.cn/usercenter/apikeys",
            LlmBackend::OpenAi => "https://platform.openai.com/api-keys",
            LlmBackend::Anthropic => "https://console.anthropic.com/settings/keys",
            LlmBackend::Deepinfra => "https://deepinfra.com/dash/api_keys",
            LlmBackend::OpenRouter => "https://openrouter.ai/keys",
            LlmBackend::Ollama => "https://ollama.ai (no key needed, just run locally)",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmBackend::Zhipu => "glm-4-flash",
            LlmBackend::OpenAi => "gpt-4o",
            LlmBackend::Anthropic => "claude-sonnet-4-20250514",
            LlmBackend::Deepinfra => "meta-llama/Llama-3.3-70B-Instruct",
            LlmBackend::OpenRouter => "anthropic/claude-sonnet-4",
            LlmBackend::Ollama => "qwen2.5-coder:7b",
        }
    }

    pub fn api_url(&self) -> &'static str {
        match self {
            LlmBackend::Zhipu => "https://open.bigmodel.cn/api/paas/v4/chat/completions",
            LlmBackend::OpenAi => "https://api.openai.com/v1/chat/completions",
            LlmBackend::Anthropic => "https://api.anthropic.com/v1/messages",
            LlmBackend::Deepinfra => "https://api.deepinfra.com/v1/openai/chat/completions",
            LlmBackend::OpenRouter => "https://openrouter.ai/api/v1/chat/completions",
            LlmBackend::Ollama => "http://localhost:11434/v1/chat/completions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LlmBackend::Zhipu => "Zhipu GLM",
            LlmBackend::OpenAi => "OpenAI",
            LlmBackend::Anthropic => "Anthropic",
            LlmBackend::Deepinfra => "Deepinfra",
            LlmBackend::OpenRouter => "OpenRouter",
            LlmBackend::Ollama => "Ollama (local)",
        }
    }

    pub fn is_openai_compatible(&self) -> bool {
        !matches!(self, LlmBackend::Anthropic)
    }

    pub fn requires_api_key(&self) -> bool {
        !matches!(self, LlmBackend::Ollama)
    }
}

impl FromStr for LlmBackend {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zhipu" | "glm" => Ok(LlmBackend::Zhipu),
            "openai" => Ok(LlmBackend::OpenAi),
            "anthropic" | "claude" => Ok(LlmBackend::Anthropic),
            "deepinfra" => Ok(LlmBackend::Deepinfra),
            "openrouter" => Ok(LlmBackend::OpenRouter),
            "ollama" => Ok(LlmBackend::Ollama),
            other => Err(AiError::ConfigError(format!("unknown backend '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub backend: LlmBackend,
    pub model: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            backend: LlmBackend::default(),
            model: None,
            max_tokens: 4096,
            // The evaluator is a judge; keep it as repeatable as the API allows
            temperature: 0.0,
            top_p: 1.0,
            timeout_secs: 120,
        }
    }
}

impl AiConfig {
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.backend.default_model())
    }
}

/// Unified LLM client, sync HTTP via ureq (no tokio needed)
pub struct AiClient {
    config: AiConfig,
    api_key: String,
    agent: ureq::Agent,
}

fn make_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // Status codes are mapped to AiError below
        .timeout_global(Some(std::time::Duration::from_secs(timeout_secs)))
        .build()
        .new_agent()
}

impl AiClient {
    pub fn new(config: AiConfig, api_key: impl Into<String>) -> Self {
        let agent = make_agent(config.timeout_secs);
        Self {
            config,
            api_key: api_key.into(),
            agent,
        }
    }

    pub fn from_env(backend: LlmBackend) -> AiResult<Self> {
        let config = AiConfig {
            backend,
            ..Default::default()
        };
        Self::from_env_with_config(config, None)
    }

    /// Build a client, resolving the key as: explicit, backend variable,
    /// then `API_KEY`.
    pub fn from_env_with_config(mut config: AiConfig, api_key: Option<String>) -> AiResult<Self> {
        if !config.backend.requires_api_key() {
            if config.model.is_none() {
                config.model = env::var("OLLAMA_MODEL").ok();
            }
            return Ok(Self::new(config, "ollama"));
        }

        let env_key = config.backend.env_key();
        let api_key = api_key
            .or_else(|| env::var(env_key).ok())
            .or_else(|| env::var(GENERIC_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey {
                env_var: env_key.to_string(),
                signup_url: config.backend.signup_url().to_string(),
            })?;

        Ok(Self::new(config, api_key))
    }

    pub fn backend(&self) -> LlmBackend {
        self.config.backend
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    /// Generate a response (sync)
    pub fn generate(&self, messages: Vec<Message>, system: Option<&str>) -> AiResult<String> {
        if self.config.backend.is_openai_compatible() {
            self.generate_openai(messages, system)
        } else {
            self.generate_anthropic(messages, system)
        }
    }

    fn generate_openai(&self, mut messages: Vec<Message>, system: Option<&str>) -> AiResult<String> {
        if let Some(sys) = system {
            messages.insert(0, Message::system(sys));
        }

        let body = OpenAiRequest {
            model: self.config.model().to_string(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
        };

        let mut req = self
            .agent
            .post(self.config.backend.api_url())
            .header("Content-Type", "application/json");

        if self.config.backend.requires_api_key() {
            req = req.header("Authorization", &format!("Bearer {}", self.api_key));
        }

        let response = req.send_json(&body).map_err(|e| AiError::ApiError {
            status: 0,
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let error_text = response.into_body().read_to_string().unwrap_or_default();
            return Err(AiError::ApiError {
                status,
                message: error_text,
            });
        }

        let resp: OpenAiResponse = response
            .into_body()
            .read_json()
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        resp.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AiError::ParseError("No response choices".to_string()))
    }

    fn generate_anthropic(&self, messages: Vec<Message>, system: Option<&str>) -> AiResult<String> {
        let messages: Vec<_> = messages
            .into_iter()
            .filter(|m| m.role != Role::System)
            .collect();

        let body = AnthropicRequest {
            model: self.config.model().to_string(),
            max_tokens: self.config.max_tokens,
            messages,
            system: system.map(|s| s.to_string()),
            temperature: Some(self.config.temperature),
        };

        let response = self
            .agent
            .post(self.config.backend.api_url())
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .send_json(&body)
            .map_err(|e| AiError::ApiError {
                status: 0,
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let error_text = response.into_body().read_to_string().unwrap_or_default();
            return Err(AiError::ApiError {
                status,
                message: error_text,
            });
        }

        let resp: AnthropicResponse = response
            .into_body()
            .read_json()
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        resp.content
            .into_iter()
            .find(|c| c.content_type == "text")
            .map(|c| c.text)
            .ok_or_else(|| AiError::ParseError("No text content in response".to_string()))
    }
}

// OpenAI-compatible API types
#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: String,
}

// Anthropic API types
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    #[serde(rename = "type")]
    content_type: String,
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        assert_eq!(LlmBackend::default(), LlmBackend::Zhipu);
        assert_eq!(LlmBackend::Zhipu.default_model(), "glm-4-flash");
        assert_eq!(LlmBackend::OpenAi.default_model(), "gpt-4o");
        assert!(LlmBackend::Zhipu.is_openai_compatible());
        assert!(!LlmBackend::Anthropic.is_openai_compatible());
    }

    #[test]
    fn test_config_model() {
        let config = AiConfig::default();
        assert_eq!(config.model(), "glm-4-flash");
        assert_eq!(config.temperature, 0.0);

        let config = AiConfig {
            model: Some("custom-model".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model(), "custom-model");
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("zhipu".parse::<LlmBackend>().unwrap(), LlmBackend::Zhipu);
        assert_eq!("Claude".parse::<LlmBackend>().unwrap(), LlmBackend::Anthropic);
        assert_eq!(" openai ".parse::<LlmBackend>().unwrap(), LlmBackend::OpenAi);
        assert!(matches!(
            "palm".parse::<LlmBackend>(),
            Err(AiError::ConfigError(_))
        ));
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = AiConfig::default();
        let client = AiClient::from_env_with_config(config, Some("sk-explicit".into())).unwrap();
        assert_eq!(client.api_key, "sk-explicit");
        assert_eq!(client.backend(), LlmBackend::Zhipu);
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = AiConfig {
            backend: LlmBackend::Ollama,
            model: Some("llama3".into()),
            ..Default::default()
        };
        let client = AiClient::from_env_with_config(config, None).unwrap();
        assert_eq!(client.model(), "llama3");
    }

    #[test]
    fn test_openai_request_shape() {
        let body = OpenAiRequest {
            model: "glm-4-flash".into(),
            messages: vec![Message::system("judge"), Message::user("summary")],
            max_tokens: 10,
            temperature: 0.0,
            top_p: 1.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "summary");
        assert_eq!(json["top_p"], 1.0);
    }
}
