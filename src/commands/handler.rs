//! Message handler implementation.

use std::sync::Arc;

use tracing::{debug, info};

use super::types::BotCommand;
use crate::brain::HiveMind;
use crate::config::PersonalityKey;
use crate::telegram::{Update, truncate_for_log};

/// A reply to deliver to a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Chat the reply goes to.
    pub chat_id: i64,

    /// Markdown-formatted reply text.
    pub text: String,
}

/// Turns inbound messages into replies.
#[derive(Debug, Clone)]
pub struct MessageHandler {
    /// Decision core shared across requests.
    mind: Arc<HiveMind>,

    /// Link surfaced by `/pay`.
    payment_link: String,

    /// Username commands must be addressed to in group chats, if known.
    bot_username: Option<String>,
}

impl MessageHandler {
    /// Creates a new message handler.
    #[must_use]
    pub fn new(mind: Arc<HiveMind>, payment_link: String) -> Self {
        Self {
            mind,
            payment_link,
            bot_username: None,
        }
    }

    /// Only answers `/command@name` when `name` is this bot.
    #[must_use]
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    /// Handles an update, returning the reply to send, if any.
    ///
    /// Updates that are not text messages are ignored.
    pub async fn handle_update(&self, update: &Update) -> Option<Reply> {
        let Some((chat_id, text)) = update.text_message() else {
            debug!("Ignoring update {} without text", update.update_id);
            return None;
        };

        let text = self.handle_text(text).await?;
        Some(Reply { chat_id, text })
    }

    /// Handles message text, returning the reply text, if any.
    ///
    /// Unknown commands get no reply.
    pub async fn handle_text(&self, text: &str) -> Option<String> {
        if let Some(command) = BotCommand::parse_for(text, self.bot_username.as_deref()) {
            debug!("Handling command: {}", command);
            return Some(self.execute(command).await);
        }

        if BotCommand::is_command(text) {
            debug!("Ignoring unknown command: {}", truncate_for_log(text, 30));
            return None;
        }

        let (key, reply) = self.mind.respond(text);
        info!(
            "Message \"{}\" answered by {}",
            truncate_for_log(text, 30),
            key
        );
        Some(reply)
    }

    /// Executes a parsed command.
    async fn execute(&self, command: BotCommand) -> String {
        match command {
            BotCommand::Start => self.handle_start().await,
            BotCommand::Pay => self.handle_pay(),
            BotCommand::Help => handle_help(),
        }
    }

    async fn handle_start(&self) -> String {
        let prediction = self.mind.awaken().await;
        let (key, agent) = self.mind.select(prediction.value, "");
        info!("Start: market {:.2} activates {}", prediction.value, key);

        let phrase = if agent.activation_phrase.is_empty() {
            "Activated"
        } else {
            agent.activation_phrase.as_str()
        };

        format!(
            "{phrase}\n\n\
             📊 *Market (AI):* {:.2}\n\
             🎯 *Strategy:* {}",
            prediction.value, agent.operating_style
        )
    }

    fn handle_pay(&self) -> String {
        let commander = self.mind.personalities().get(PersonalityKey::Commander);
        let emoji = if commander.emoji.is_empty() {
            "💰"
        } else {
            commander.emoji.as_str()
        };

        format!(
            "{emoji} *PAYMENT ORDER GENERATED*\n\
             👉 [Pay now]({})",
            self.payment_link
        )
    }
}

fn handle_help() -> String {
    let mut lines = vec!["*Commands*".to_owned()];
    for command in BotCommand::ALL {
        lines.push(format!("{command} - {}", command.description()));
    }
    lines.push(String::new());
    lines.push("Or just write to me and the right personality will answer.".to_owned());
    lines.join("\n")
}
