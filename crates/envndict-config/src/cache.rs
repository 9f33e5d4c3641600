use serde::{Deserialize, Serialize};

use crate::var;

pub const MEMORY_SCHEME: &str = "memory://";

fn default_url() -> String {
    "redis://127.0.0.1:6379/1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Redis connection URL, or `memory://` for the in-process store
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl CacheConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: var(lookup, "CACHE_URL").unwrap_or_else(default_url),
        }
    }

    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_SCHEME)
    }
}
