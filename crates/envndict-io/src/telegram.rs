use anyhow::{Context, Result};
use envndict_types::{ChatKind, ChatSender, IncomingMessage, OutgoingMessage};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Minimal Telegram Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(api_url: &str, bot_token: &str) -> Self {
        Self {
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token),
            client: reqwest::Client::new(),
        }
    }

    /// Identity of the bot, also proves the token works
    pub async fn get_me(&self) -> Result<BotUser> {
        self.invoke("getMe", json!({})).await
    }

    /// Long-poll for updates starting at `offset`
    pub async fn get_updates(&self, offset: i64, timeout_seconds: u64) -> Result<Vec<Update>> {
        let params = json!({
            "offset": offset,
            "timeout": timeout_seconds,
            "allowed_updates": ["message"],
        });
        self.invoke("getUpdates", params).await
    }

    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        let request = SendMessageRequest {
            chat_id: message.chat_id,
            text: &message.text,
            parse_mode: message.parse_mode.as_api_str(),
        };
        let params = serde_json::to_value(&request).context("Failed to encode sendMessage")?;

        let _sent: serde_json::Value = self.invoke("sendMessage", params).await?;
        Ok(())
    }

    /// Invoke a Bot API method
    async fn invoke<T>(&self, method: &str, params: serde_json::Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(&params)
            .send()
            .await
            .with_context(|| format!("Failed to send {method} request"))?;

        response
            .json::<TelegramResponse<T>>()
            .await
            .with_context(|| format!("Failed to parse {method} response"))?
            .into_result(method)
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
}

#[derive(Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> TelegramResponse<T> {
    fn into_result(self, method: &str) -> Result<T> {
        if !self.ok {
            anyhow::bail!(
                "Telegram {method} error: {}",
                self.description.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        self.result
            .with_context(|| format!("Telegram {method} returned no result"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Message {
    /// `None` for service messages and anything else without text
    pub fn into_incoming(self) -> Option<IncomingMessage> {
        let text = self.text?;
        let chat = self.chat;

        Some(IncomingMessage {
            sender: ChatSender {
                id: chat.id,
                kind: chat.kind,
                first_name: chat.first_name.unwrap_or_default(),
                last_name: chat.last_name.unwrap_or_default(),
                title: chat.title.unwrap_or_default(),
            },
            text,
        })
    }
}
