//! Configuration for repograde
//!
//! Supports loading config from:
//! - ~/.config/repograde/config.toml
//! - Environment variables (highest priority)
//!
//! The evaluator backend is fixed here, once, when the client is built.

use crate::ai::{AiClient, AiConfig, AiResult, LlmBackend};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BACKEND_ENV: &str = "REPOGRADE_BACKEND";
pub const MODEL_ENV: &str = "REPOGRADE_MODEL";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GraderConfig {
    #[serde(default)]
    pub ai: AiSection,
    #[serde(default)]
    pub forge: ForgeSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AiSection {
    /// zhipu (default), openai, anthropic, deepinfra, openrouter, ollama
    pub backend: Option<LlmBackend>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForgeSection {
    /// Host accepted in repository locators
    #[serde(default = "default_forge_host")]
    pub host: String,
    /// Optional URL prefix that replaces `https://` when cloning
    pub clone_mirror: Option<String>,
}

impl Default for ForgeSection {
    fn default() -> Self {
        Self {
            host: default_forge_host(),
            clone_mirror: None,
        }
    }
}

fn default_forge_host() -> String {
    "github.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSection {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    5000
}

impl GraderConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/repograde/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::user_config_path()
            .filter(|p| p.exists())
            .map(|p| Self::from_file(&p))
            .transpose()?
            .unwrap_or_default();

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Apply overrides from an environment lookup.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(backend) = lookup(BACKEND_ENV) {
            self.ai.backend = Some(backend.parse()?);
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.ai.model = Some(model);
        }
        Ok(())
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repograde").join("config.toml"))
    }

    pub fn backend(&self) -> LlmBackend {
        self.ai.backend.unwrap_or_default()
    }

    pub fn ai_config(&self) -> AiConfig {
        let defaults = AiConfig::default();
        AiConfig {
            backend: self.backend(),
            model: self.ai.model.clone(),
            max_tokens: self.ai.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.ai.temperature.unwrap_or(defaults.temperature),
            top_p: self.ai.top_p.unwrap_or(defaults.top_p),
            timeout_secs: self.ai.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }

    /// Build the single evaluator client for this process.
    pub fn build_client(&self) -> AiResult<AiClient> {
        AiClient::from_env_with_config(self.ai_config(), self.ai.api_key.clone())
    }

    /// Create the user config directory and an example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, EXAMPLE_CONFIG)?;
        }

        Ok(config_path)
    }
}

const EXAMPLE_CONFIG: &str = r#"# repograde configuration

[ai]
# Backend: zhipu (default), openai, anthropic, deepinfra, openrouter, ollama
# backend = "zhipu"
# model = "glm-4-flash"
# Prefer the API_KEY or <BACKEND>_API_KEY environment variables over this
# api_key = "..."
# temperature = 0.0
# top_p = 1.0
# timeout_secs = 120

[forge]
# host = "github.com"
# clone_mirror = "https://gitclone.com/"

[server]
# host = "127.0.0.1"
# port = 5000
"#;
