//! Application settings loaded from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Payment URL used when `PAYMENT_LINK` is not set.
pub const DEFAULT_PAYMENT_LINK: &str = "https://mpago.li/1wbjMgo";

/// Bot and HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Telegram Bot API token.
    pub telegram_token: String,

    /// Public base URL of this service, used to register the webhook.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Link surfaced by the payment command.
    #[serde(default = "default_payment_link")]
    pub payment_link: String,

    /// Path to the personality manifest.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Bot username, used to ignore commands meant for other bots.
    #[serde(default)]
    pub bot_username: Option<String>,
}

fn default_port() -> u16 {
    5000
}

fn default_payment_link() -> String {
    DEFAULT_PAYMENT_LINK.to_owned()
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("agents_manifest.json")
}

impl BotSettings {
    /// Creates settings with the given token and defaults for everything else.
    #[must_use]
    pub fn new(telegram_token: String) -> Self {
        Self {
            telegram_token,
            webhook_url: None,
            port: default_port(),
            payment_link: default_payment_link(),
            manifest_path: default_manifest_path(),
            bot_username: None,
        }
    }

    /// Creates settings from environment variables.
    ///
    /// Expects `TELEGRAM_TOKEN` to be set. `WEBHOOK_URL`, `PORT`,
    /// `PAYMENT_LINK`, `AGENTS_MANIFEST` and `BOT_USERNAME` are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or the port is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token = std::env::var("TELEGRAM_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar("TELEGRAM_TOKEN"))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => default_port(),
        };

        Ok(Self {
            telegram_token,
            webhook_url: std::env::var("WEBHOOK_URL")
                .ok()
                .and_then(|url| normalize_base_url(&url)),
            port,
            payment_link: std::env::var("PAYMENT_LINK")
                .unwrap_or_else(|_| default_payment_link()),
            manifest_path: std::env::var("AGENTS_MANIFEST")
                .map_or_else(|_| default_manifest_path(), PathBuf::from),
            bot_username: std::env::var("BOT_USERNAME")
                .ok()
                .and_then(|name| normalize_username(&name)),
        })
    }

    /// Full callback URL Telegram should post updates to.
    #[must_use]
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.webhook_url.as_deref().map(webhook_endpoint)
    }
}

/// Builds the webhook callback URL from a public base URL.
#[must_use]
pub fn webhook_endpoint(base_url: &str) -> String {
    format!("{}/webhook", base_url.trim_end_matches('/'))
}

/// Trims a base URL and discards it if blank.
fn normalize_base_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_owned())
}

/// Strips a leading `@` and discards a blank username.
fn normalize_username(name: &str) -> Option<String> {
    let name = name.trim().trim_start_matches('@');
    (!name.is_empty()).then(|| name.to_owned())
}

/// Firebase Cloud Messaging credentials for the push notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Firebase project ID.
    pub project_id: String,

    /// OAuth2 bearer token with the `firebase.messaging` scope.
    pub access_token: String,
}

impl PushConfig {
    /// Reads `FCM_PROJECT_ID` and `FCM_ACCESS_TOKEN`.
    ///
    /// Returns `None` unless both are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let project_id = std::env::var("FCM_PROJECT_ID").ok()?;
        let access_token = std::env::var("FCM_ACCESS_TOKEN").ok()?;
        Some(Self {
            project_id,
            access_token,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid PORT value '{0}' (must be an integer between 0 and 65535)")]
    InvalidPort(String),
}
