use envndict_core::analytics::UsageSink;
use envndict_core::cache::{CacheError, DefinitionCache};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tokio::sync::OnceCell;

/// Redis-backed definition cache and usage counters.
///
/// Definitions are plain string keys without expiry, counters are sorted sets.
/// The connection is made on first use, so an unreachable server only fails
/// the calls that need it.
pub struct RedisStore {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Validate `url` without connecting
    pub fn open(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(CacheError::transport)?;

        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    /// Shared connection, retried on the next call after a failed connect
    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let conn = self.client.get_connection_manager().await?;
                tracing::info!("Connected to redis");
                Ok::<_, redis::RedisError>(conn)
            })
            .await
            .map_err(CacheError::transport)?;

        Ok(conn.clone())
    }
}

#[async_trait::async_trait]
impl DefinitionCache for RedisStore {
    async fn get(&self, word: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        conn.get(word).await.map_err(CacheError::transport)
    }

    async fn set(&self, word: &str, definition: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(word, definition)
            .await
            .map_err(CacheError::transport)
    }
}

#[async_trait::async_trait]
impl UsageSink for RedisStore {
    async fn increment(&self, counter: &str, member: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        conn.zincr::<_, _, _, f64>(counter, member, 1)
            .await
            .map(|_| ())
            .map_err(CacheError::transport)
    }
}
