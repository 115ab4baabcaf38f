//! Telegram Bot API module.
//!
//! Provides the webhook update types and the outbound transport used to
//! deliver replies and register the webhook.

mod client;
mod types;

pub use client::{TelegramBot, TelegramError, Transport};
pub(crate) use client::truncate_for_log;
pub use types::{Chat, Message, Update, User};
