use serde::{Deserialize, Serialize};

use crate::var;

fn default_path() -> String {
    "data/en_vi".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let additional_paths = var(lookup, "DICTIONARY_ADDITIONAL_PATHS")
            .map(|paths| {
                paths
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            path: var(lookup, "DICTIONARY_PATH").unwrap_or_else(default_path),
            additional_paths,
        }
    }
}
