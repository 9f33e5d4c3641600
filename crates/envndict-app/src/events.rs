use std::sync::Arc;

use envndict_types::IncomingMessage;
use kanal::AsyncReceiver;

use crate::state::AppState;

pub mod incoming_message;

use incoming_message::handle_incoming_message;

/// App's main loop. One message is fully answered before the next is taken.
pub async fn event_loop(
    state: Arc<AppState>,
    incoming_rx: AsyncReceiver<IncomingMessage>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for messages");
    loop {
        let message = incoming_rx.recv().await?;

        tracing::debug!(
            sender_id = message.sender.id,
            "[EVENT_LOOP] message received: {} chars",
            message.text.chars().count()
        );
        handle_incoming_message(&state, message).await;
    }
}
