//! Telegram Bot API client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during Telegram operations.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error in {method}: {description}")]
    Api {
        method: &'static str,
        description: String,
    },
}

/// Outbound side of the messaging transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a Markdown-formatted text message to a chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError>;

    /// Registers the URL Telegram should deliver updates to.
    async fn set_webhook(&self, url: &str) -> Result<(), TelegramError>;
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram bot speaking the HTTPS Bot API.
pub struct TelegramBot {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl TelegramBot {
    /// Creates a bot for the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, "https://api.telegram.org")
    }

    /// Creates a bot against a custom Bot API server.
    #[must_use]
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_owned(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    async fn call(
        &self,
        method: &'static str,
        payload: &serde_json::Value,
    ) -> Result<(), TelegramError> {
        let response: ApiResponse = self
            .client
            .post(self.api_url(method))
            .json(payload)
            .send()
            .await?
            .json()
            .await?;

        if response.ok {
            Ok(())
        } else {
            Err(TelegramError::Api {
                method,
                description: response
                    .description
                    .unwrap_or_else(|| "unknown error".to_owned()),
            })
        }
    }
}

#[async_trait]
impl Transport for TelegramBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        debug!("Sending message to chat {}: \"{}\"", chat_id, truncate_for_log(text, 40));

        let markdown = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        match self.call("sendMessage", &markdown).await {
            Err(TelegramError::Api { description, .. }) if is_markup_rejection(&description) => {
                warn!("Markdown rejected ({}), falling back to plain text", description);
                self.call("sendMessage", &json!({ "chat_id": chat_id, "text": text }))
                    .await
            }
            other => other,
        }
    }

    async fn set_webhook(&self, url: &str) -> Result<(), TelegramError> {
        self.call(
            "setWebhook",
            &json!({
                "url": url,
                "allowed_updates": ["message"],
            }),
        )
        .await?;

        info!("Telegram webhook set to {}", url);
        Ok(())
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

/// Returns true if Telegram refused a message because of its markup.
fn is_markup_rejection(description: &str) -> bool {
    description.to_lowercase().contains("can't parse entities")
}

/// Truncates a string for logging purposes.
pub(crate) fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
