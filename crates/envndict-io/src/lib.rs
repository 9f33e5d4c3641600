pub mod outbox;
pub mod poller;
pub mod telegram;

pub use outbox::Outbox;
pub use poller::UpdatePoller;
pub use telegram::TelegramClient;
