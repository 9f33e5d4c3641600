pub mod types;

pub use types::{ChatKind, ChatSender, IncomingMessage, OutgoingMessage, ParseMode};
