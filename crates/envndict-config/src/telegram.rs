use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var, var};

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_bot_name() -> String {
    "@envndictbot".to_string()
}

fn default_poll_timeout_seconds() -> u64 {
    2
}

fn default_poll_retry_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Mention handle group messages must start or end with
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    #[serde(default = "default_poll_timeout_seconds")]
    pub poll_timeout_seconds: u64,
    #[serde(default = "default_poll_retry_delay_ms")]
    pub poll_retry_delay_ms: u64,
}

impl TelegramConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token =
            var(lookup, "TELEGRAM_BOT_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        Ok(Self {
            bot_token,
            api_url: var(lookup, "TELEGRAM_API_URL").unwrap_or_else(default_api_url),
            bot_name: var(lookup, "BOT_NAME").unwrap_or_else(default_bot_name),
            poll_timeout_seconds: parse_var(lookup, "POLL_TIMEOUT_SECONDS")?
                .unwrap_or_else(default_poll_timeout_seconds),
            poll_retry_delay_ms: parse_var(lookup, "POLL_RETRY_DELAY_MS")?
                .unwrap_or_else(default_poll_retry_delay_ms),
        })
    }
}
