use envndict_types::OutgoingMessage;

use crate::telegram::TelegramClient;

/// Where replies go
#[async_trait::async_trait]
pub trait Outbox: Send + Sync {
    async fn deliver(&self, message: &OutgoingMessage) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl Outbox for TelegramClient {
    async fn deliver(&self, message: &OutgoingMessage) -> anyhow::Result<()> {
        self.send_message(message).await
    }
}
