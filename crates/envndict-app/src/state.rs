use std::sync::Arc;

use envndict_core::MessageRouter;
use envndict_core::analytics::UsageRecorder;
use envndict_io::Outbox;

pub struct AppState {
    pub router: MessageRouter,
    pub outbox: Arc<dyn Outbox>,
    pub usage: UsageRecorder,
}

impl AppState {
    pub fn new(router: MessageRouter, outbox: Arc<dyn Outbox>, usage: UsageRecorder) -> Self {
        Self {
            router,
            outbox,
            usage,
        }
    }
}
