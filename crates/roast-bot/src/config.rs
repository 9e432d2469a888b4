//! Configuration management for roast-bot
//!
//! Everything comes from the environment; CLI flags can override the
//! corpus path and ports.

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

use std::path::PathBuf;

use llm_huggingface::HuggingFaceConfig;
use roast_std::env::ReadEnv;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ROAST_FILE: &str = "comments.txt";
pub const DEFAULT_PORT: u16 = 10000;
pub const WEBHOOK_PATH: &str = "/webhook";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid webhook URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Llm(#[from] llm_huggingface::ConfigError),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    /// Public base URL, without the webhook path.
    pub external_url: String,
    pub roast_file: PathBuf,
    /// Webhook listener port.
    pub port: u16,
    /// Health server port. `None` disables it.
    pub health_port: Option<u16>,
    pub llm: HuggingFaceConfig,
}

impl BotConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        let bot_token = env
            .non_empty_var("BOT_TOKEN")
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;
        let external_url = env
            .non_empty_var("RENDER_EXTERNAL_URL")
            .ok_or(ConfigError::Missing("RENDER_EXTERNAL_URL"))?;
        let llm = HuggingFaceConfig::from_env(env)?;

        let roast_file = env
            .non_empty_var("ROAST_FILE")
            .unwrap_or_else(|| DEFAULT_ROAST_FILE.to_string())
            .into();
        let port = env
            .non_empty_var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let health_port = env
            .non_empty_var("HEALTH_CHECK_PORT")
            .and_then(|p| p.parse().ok());

        Ok(Self {
            bot_token,
            external_url,
            roast_file,
            port,
            health_port,
            llm,
        })
    }

    /// `{external_url}/webhook`, tolerating a trailing slash on the base.
    pub fn webhook_url(&self) -> Result<Url, ConfigError> {
        let url = format!(
            "{}{}",
            self.external_url.trim_end_matches('/'),
            WEBHOOK_PATH
        );
        Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
    }
}
