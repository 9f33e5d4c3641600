use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var, var};

fn default_api_url() -> String {
    "https://translate.yandex.net/api/v1.5/tr.json/translate".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Empty key leaves remote lookups failing with an apology
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// No timeout when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_seconds: None,
        }
    }
}

impl TranslatorConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_key: var(lookup, "YANDEX_API_KEY").unwrap_or_default(),
            api_url: var(lookup, "YANDEX_API_URL").unwrap_or_else(default_api_url),
            timeout_seconds: parse_var(lookup, "TRANSLATOR_TIMEOUT_SECONDS")?,
        })
    }
}
