use std::collections::HashMap;

use envndict_core::analytics::UsageSink;
use envndict_core::cache::{CacheError, DefinitionCache};
use tokio::sync::RwLock;

/// In-process store for running without a redis server.
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    definitions: RwLock<HashMap<String, String>>,
    counters: RwLock<HashMap<String, HashMap<String, f64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score of `member` in `counter`
    pub async fn score(&self, counter: &str, member: &str) -> Option<f64> {
        self.counters
            .read()
            .await
            .get(counter)
            .and_then(|members| members.get(member))
            .copied()
    }
}

#[async_trait::async_trait]
impl DefinitionCache for MemoryStore {
    async fn get(&self, word: &str) -> Result<Option<String>, CacheError> {
        Ok(self.definitions.read().await.get(word).cloned())
    }

    async fn set(&self, word: &str, definition: &str) -> Result<(), CacheError> {
        self.definitions
            .write()
            .await
            .insert(word.to_string(), definition.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl UsageSink for MemoryStore {
    async fn increment(&self, counter: &str, member: &str) -> Result<(), CacheError> {
        let mut counters = self.counters.write().await;
        *counters
            .entry(counter.to_string())
            .or_default()
            .entry(member.to_string())
            .or_default() += 1.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_definitions_round_trip() {
        let store = MemoryStore::new();

        assert_eq!(store.get("hello").await.unwrap(), None);
        store.set("hello", "xin chào").await.unwrap();
        assert_eq!(store.get("hello").await.unwrap().as_deref(), Some("xin chào"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();

        store.set("cat", "-> mèo").await.unwrap();
        store.set("cat", "con mèo").await.unwrap();

        assert_eq!(store.get("cat").await.unwrap().as_deref(), Some("con mèo"));
    }

    #[tokio::test]
    async fn test_counters_increment_per_member() {
        let store = MemoryStore::new();

        store.increment("sorted_words", "w:cat").await.unwrap();
        store.increment("sorted_words", "w:cat").await.unwrap();
        store.increment("sorted_users", "u:7").await.unwrap();

        assert_eq!(store.score("sorted_words", "w:cat").await, Some(2.0));
        assert_eq!(store.score("sorted_users", "u:7").await, Some(1.0));
        assert_eq!(store.score("sorted_users", "u:8").await, None);
    }
}
