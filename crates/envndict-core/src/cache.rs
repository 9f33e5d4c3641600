use std::error::Error;

/// Word to definition store, populated write-through and never expired
#[async_trait::async_trait]
pub trait DefinitionCache: Send + Sync {
    /// `Ok(None)` when the word has never been stored
    async fn get(&self, word: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, word: &str, definition: &str) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache transport error: {0}")]
    Transport(#[source] Box<dyn Error + Send + Sync>),
}

impl CacheError {
    pub fn transport(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        CacheError::Transport(err.into())
    }
}
