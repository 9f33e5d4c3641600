use std::time::Duration;

use envndict_types::IncomingMessage;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::telegram::{TelegramClient, Update};

/// Long-polling source of incoming messages
pub struct UpdatePoller {
    client: TelegramClient,
    timeout_seconds: u64,
    retry_delay: Duration,
    offset: i64,
}

impl UpdatePoller {
    pub fn new(client: TelegramClient, timeout_seconds: u64, retry_delay: Duration) -> Self {
        Self {
            client,
            timeout_seconds,
            retry_delay,
            offset: 0,
        }
    }

    /// Poll until cancelled, forwarding text messages in arrival order
    pub async fn run(
        mut self,
        tx: AsyncSender<IncomingMessage>,
        cancel: CancellationToken,
    ) -> anyhow::Result<()> {
        tracing::info!("Polling for updates");

        loop {
            let result = tokio::select! {
                _ = cancel.cancelled() => break,
                result = self.client.get_updates(self.offset, self.timeout_seconds) => result,
            };

            match result {
                Ok(updates) => {
                    for message in self.accept(updates) {
                        tx.send(message).await?;
                    }
                }
                Err(e) => {
                    tracing::warn!("getUpdates failed: {e:#}");
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = tokio::time::sleep(self.retry_delay) => {}
                    }
                }
            }
        }

        tracing::info!("Update poller stopping");
        Ok(())
    }

    /// Advance the offset past every update and keep the text messages
    fn accept(&mut self, updates: Vec<Update>) -> Vec<IncomingMessage> {
        let mut messages = Vec::with_capacity(updates.len());

        for update in updates {
            self.offset = self.offset.max(update.update_id + 1);

            match update.message.and_then(|m| m.into_incoming()) {
                Some(message) => messages.push(message),
                None => tracing::debug!(update_id = update.update_id, "skipping non-text update"),
            }
        }

        messages
    }
}
