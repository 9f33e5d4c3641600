use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};

use crate::cache::CacheError;

pub const USERS_COUNTER: &str = "sorted_users";
pub const WORDS_COUNTER: &str = "sorted_words";

/// A single usage increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageEvent {
    User(i64),
    Word(String),
}

impl UsageEvent {
    pub fn counter(&self) -> &'static str {
        match self {
            UsageEvent::User(_) => USERS_COUNTER,
            UsageEvent::Word(_) => WORDS_COUNTER,
        }
    }

    pub fn member(&self) -> String {
        match self {
            UsageEvent::User(id) => format!("u:{id}"),
            UsageEvent::Word(word) => format!("w:{word}"),
        }
    }
}

/// Destination of usage increments
#[async_trait::async_trait]
pub trait UsageSink: Send + Sync {
    /// Add one to `member` within `counter`
    async fn increment(&self, counter: &str, member: &str) -> Result<(), CacheError>;
}

/// Non-blocking handle for recording usage from the message path.
///
/// Events go through a bounded queue drained by [`drain_usage`]. When the
/// queue is full the event is dropped.
#[derive(Clone)]
pub struct UsageRecorder {
    tx: AsyncSender<UsageEvent>,
}

impl UsageRecorder {
    pub fn bounded(capacity: usize) -> (Self, AsyncReceiver<UsageEvent>) {
        let (tx, rx) = kanal::bounded_async(capacity);
        (Self { tx }, rx)
    }

    pub fn record(&self, event: UsageEvent) {
        match self.tx.try_send(event) {
            Ok(true) => {}
            Ok(false) => tracing::debug!("usage queue full, increment dropped"),
            Err(e) => tracing::debug!("usage queue closed: {e}"),
        }
    }
}

/// Forward queued increments to the sink until every recorder is dropped
pub async fn drain_usage(sink: Arc<dyn UsageSink>, rx: AsyncReceiver<UsageEvent>) {
    while let Ok(event) = rx.recv().await {
        let member = event.member();
        if let Err(e) = sink.increment(event.counter(), &member).await {
            tracing::warn!(counter = event.counter(), %member, "usage increment failed: {e}");
        }
    }
    tracing::debug!("usage queue closed, analytics drain stopping");
}
