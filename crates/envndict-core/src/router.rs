use envndict_types::ChatSender;

use crate::messages;
use crate::resolver::DefinitionResolver;

pub const START_COMMAND: &str = "/start";
pub const STOP_COMMAND: &str = "/stop";
pub const COMMAND_MARKER: char = '/';

/// Turns an incoming text into the reply text
pub struct MessageRouter {
    bot_name: String,
    resolver: DefinitionResolver,
}

impl MessageRouter {
    pub fn new(bot_name: impl Into<String>, resolver: DefinitionResolver) -> Self {
        Self {
            bot_name: bot_name.into(),
            resolver,
        }
    }

    /// Reply for `text`. An empty reply must not be sent.
    pub async fn route(&self, text: &str, sender: &ChatSender) -> String {
        let text = if sender.is_group_chat() {
            match self.strip_mention(text) {
                Some(text) => text,
                None => return String::new(),
            }
        } else {
            text
        };

        // Order matters: `/stop` is caught by the generic command check first
        if text.starts_with(START_COMMAND) {
            let name = sender.display_name();
            messages::greeting(&name)
        } else if text.starts_with(COMMAND_MARKER) || text.is_empty() {
            messages::HELP_MSG.to_string()
        } else if text.starts_with(STOP_COMMAND) {
            messages::BYE_MSG.to_string()
        } else {
            self.resolver.resolve(text, sender).await
        }
    }

    /// Group messages have to mention the bot at either end
    fn strip_mention<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.strip_prefix(self.bot_name.as_str())
            .or_else(|| text.strip_suffix(self.bot_name.as_str()))
    }
}
