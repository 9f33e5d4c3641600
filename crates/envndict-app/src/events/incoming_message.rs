use envndict_core::analytics::UsageEvent;
use envndict_types::{IncomingMessage, OutgoingMessage, ParseMode};

use crate::state::AppState;

pub async fn handle_incoming_message(state: &AppState, message: IncomingMessage) {
    let sender = message.sender;

    state.usage.record(UsageEvent::User(sender.id));

    let reply = state.router.route(&message.text, &sender).await;
    if reply.is_empty() {
        tracing::debug!(sender_id = sender.id, "nothing to reply");
        return;
    }

    let outgoing = OutgoingMessage {
        chat_id: sender.id,
        text: reply,
        // dictionary bodies carry bare `*` and `_` that break Markdown parsing
        parse_mode: ParseMode::Plain,
    };

    if let Err(e) = state.outbox.deliver(&outgoing).await {
        tracing::error!(call_site = "sendMessage", sender_id = sender.id, "{e:#}");
    }
}
