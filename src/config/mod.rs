//! Configuration module for the bot.
//!
//! Handles loading of the personality manifest (with built-in fallback)
//! and of the environment-provided runtime settings.

mod personalities;
mod settings;

pub use personalities::{ManifestError, PersonalityKey, PersonalityRecord, PersonalityTable};
pub use settings::{
    BotSettings, ConfigError, DEFAULT_PAYMENT_LINK, PushConfig, webhook_endpoint,
};
