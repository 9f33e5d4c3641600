use std::sync::Arc;

use envndict_core::analytics::{UsageEvent, UsageSink, drain_usage};
use envndict_io::UpdatePoller;
use envndict_types::IncomingMessage;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub incoming: (AsyncSender<IncomingMessage>, AsyncReceiver<IncomingMessage>),
}

impl ChannelSet {
    pub fn new(message_queue_capacity: usize) -> Self {
        Self {
            incoming: kanal::bounded_async(message_queue_capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, message_queue_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(message_queue_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        poller: UpdatePoller,
        usage_sink: Arc<dyn UsageSink>,
        usage_rx: AsyncReceiver<UsageEvent>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Sequential message handling
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.incoming.1.clone(),
        ));

        // Transport polling
        tasks.spawn(poller.run(
            self.channels.incoming.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Analytics drain
        tasks.spawn(async move {
            drain_usage(usage_sink, usage_rx).await;
            Ok(())
        });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
