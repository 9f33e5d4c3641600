use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::dictionary::DictionaryConfig;
use self::telegram::TelegramConfig;
use self::translator::TranslatorConfig;

pub mod cache;
pub mod dictionary;
pub mod telegram;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub cache: CacheConfig,
    pub translator: TranslatorConfig,
    pub dictionary: DictionaryConfig,

    /// Inbound message buffer between the poller and the handler loop
    pub message_queue_capacity: usize,
    /// Pending analytics increments before new ones are dropped
    pub usage_queue_capacity: usize,
    pub log_format: LogFormat,
}

impl Config {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let message_queue_capacity = capacity_var(&lookup, "MESSAGE_QUEUE_CAPACITY")?.unwrap_or(64);
        let usage_queue_capacity = capacity_var(&lookup, "USAGE_QUEUE_CAPACITY")?.unwrap_or(256);
        let log_format = parse_var(&lookup, "LOG_FORMAT")?.unwrap_or_default();

        Ok(Config {
            telegram: TelegramConfig::from_lookup(&lookup)?,
            cache: CacheConfig::from_lookup(&lookup),
            translator: TranslatorConfig::from_lookup(&lookup)?,
            dictionary: DictionaryConfig::from_lookup(&lookup),

            message_queue_capacity,
            usage_queue_capacity,
            log_format,
        })
    }
}

/// Non-empty trimmed value of `key`
pub(crate) fn var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(lookup, key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(None),
    }
}

/// Queue sizes; a zero-capacity kanal channel would block every send
fn capacity_var<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_var::<F, NonZeroUsize>(lookup, key)?.map(NonZeroUsize::get))
}
