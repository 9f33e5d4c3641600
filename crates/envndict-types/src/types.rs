use serde::{Deserialize, Serialize};

/// Kind of chat a message arrived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    pub fn is_group(self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Supergroup)
    }
}

/// Originator of an incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSender {
    pub id: i64,
    pub kind: ChatKind,
    pub first_name: String,
    pub last_name: String,
    /// Only set for group chats and channels
    pub title: String,
}

impl ChatSender {
    pub fn is_group_chat(&self) -> bool {
        self.kind.is_group()
    }

    /// Name used when addressing the sender.
    ///
    /// Groups are addressed by their title. Everyone else gets
    /// `"<first> <last>"`, which keeps a trailing space when there is no last name.
    pub fn display_name(&self) -> String {
        if self.is_group_chat() {
            self.title.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub sender: ChatSender,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Plain,
    Markdown,
}

impl ParseMode {
    /// Value of the `parse_mode` field, `None` for plain text
    pub fn as_api_str(self) -> Option<&'static str> {
        match self {
            ParseMode::Plain => None,
            ParseMode::Markdown => Some("Markdown"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: ParseMode,
}
