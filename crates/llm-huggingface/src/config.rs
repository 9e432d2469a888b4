use std::time::Duration;

use roast_std::env::ReadEnv;
use thiserror::Error;

pub const CHAT_COMPLETIONS_URL: &str = "https://router.huggingface.co/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(35);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Completion endpoint settings.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Bearer token (`HF_API_TOKEN`).
    pub api_token: String,
    /// Env: `HF_MODEL`. Default: [`DEFAULT_MODEL`].
    pub model: String,
    pub endpoint: String,
    /// Per-attempt timeout, covering connect through body read.
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl HuggingFaceConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: CHAT_COMPLETIONS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        let api_token = env
            .non_empty_var("HF_API_TOKEN")
            .ok_or(ConfigError::Missing("HF_API_TOKEN"))?;

        let mut config = Self::new(api_token);
        if let Some(model) = env.non_empty_var("HF_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}
