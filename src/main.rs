//! NeuraHive Bot - Main Entry Point
//!
//! Serves the Telegram webhook and answers messages with scripted
//! personalities.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use neurahive_bot::brain::HiveMind;
use neurahive_bot::commands::MessageHandler;
use neurahive_bot::config::{BotSettings, PersonalityTable, PushConfig};
use neurahive_bot::notify::PushNotifier;
use neurahive_bot::prediction::RandomPredictor;
use neurahive_bot::server::{AppState, create_router};
use neurahive_bot::telegram::{TelegramBot, Transport};

/// Telegram webhook bot with scripted personalities.
#[derive(Parser, Debug)]
#[command(name = "neurahive_bot")]
#[command(about = "Answer Telegram messages with one of four scripted personalities")]
#[command(version)]
struct Args {
    /// Path to the personality manifest (overrides AGENTS_MANIFEST).
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Generate an example manifest file and exit.
    #[arg(long)]
    generate_manifest: bool,

    /// Send one push notification to this device token and exit.
    #[arg(long, requires = "push_body")]
    push_token: Option<String>,

    /// Title of the push notification.
    #[arg(long, default_value = "NeuraHive")]
    push_title: String,

    /// Body of the push notification.
    #[arg(long)]
    push_body: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Handle example manifest generation
    if args.generate_manifest {
        return generate_example_manifest();
    }

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    if let (Some(token), Some(body)) = (&args.push_token, &args.push_body) {
        return send_push(token, &args.push_title, body).await;
    }

    let settings =
        BotSettings::from_env().context("Failed to load bot settings from environment")?;

    let manifest_path = args
        .manifest
        .unwrap_or_else(|| settings.manifest_path.clone());
    let personalities = PersonalityTable::load_or_default(&manifest_path);
    info!("Loaded {} personalities", personalities.iter().count());

    let mind = Arc::new(HiveMind::new(personalities, Arc::new(RandomPredictor::new())));
    let transport: Arc<dyn Transport> = Arc::new(TelegramBot::new(settings.telegram_token.clone()));

    // Register the webhook at startup if we know our public URL
    match settings.webhook_endpoint() {
        Some(url) => {
            if let Err(e) = transport.set_webhook(&url).await {
                error!("Failed to register webhook at {}: {}", url, e);
            }
        }
        None => warn!("WEBHOOK_URL not defined, webhook not configured"),
    }

    let state = Arc::new(AppState {
        handler: MessageHandler::new(mind, settings.payment_link.clone())
            .with_bot_username(settings.bot_username.clone()),
        transport,
        webhook_url: settings.webhook_url.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on {}", addr);
    info!("Bot is running. Use Ctrl+C to stop.");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shut down");
    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down...");
}

/// Generates an example manifest file.
fn generate_example_manifest() -> Result<()> {
    let path = "agents_manifest.example.json";
    PersonalityTable::default()
        .save_to_file(path)
        .context("Failed to write example manifest")?;

    println!("✓ Example manifest written to: {path}");
    println!("\nTo use this bot:");
    println!("1. Copy {path} to agents_manifest.json");
    println!("2. Edit the personalities to your liking");
    println!("3. Create a .env file with TELEGRAM_TOKEN and WEBHOOK_URL");
    println!("4. Run: neurahive_bot");

    Ok(())
}

/// Sends a single push notification.
async fn send_push(token: &str, title: &str, body: &str) -> Result<()> {
    let config = PushConfig::from_env()
        .context("FCM_PROJECT_ID and FCM_ACCESS_TOKEN must be set to send notifications")?;

    let name = PushNotifier::new(config)
        .send(token, title, body)
        .await
        .context("Failed to send push notification")?;

    println!("✓ Notification sent: {name}");
    Ok(())
}
