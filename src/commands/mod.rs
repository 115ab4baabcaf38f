//! Command and message handling module.
//!
//! Parses the bot commands (`/start`, `/pay`, `/help`) and turns every
//! inbound text message into a personality reply.

mod handler;
mod types;

pub use handler::{MessageHandler, Reply};
pub use types::BotCommand;
