//! HTTP server module.
//!
//! Exposes the Telegram webhook, the webhook registration endpoint and a
//! liveness page.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::commands::MessageHandler;
use crate::config::webhook_endpoint;
use crate::telegram::{Transport, Update};

/// Text served on `/`.
pub const ALIVE_MESSAGE: &str = "NeuraHive AI agent is alive.";

/// Shared state of the HTTP handlers.
pub struct AppState {
    /// Turns updates into replies.
    pub handler: MessageHandler,

    /// Delivers replies and registers the webhook.
    pub transport: Arc<dyn Transport>,

    /// Public base URL of this service.
    pub webhook_url: Option<String>,
}

/// Errors surfaced by the webhook endpoint.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Invalid update payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Creates the axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/webhook", post(handle_webhook))
        .route("/set_webhook", get(handle_set_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parses an update, answers it and delivers the reply.
///
/// Only a malformed payload is an error. Delivery failures are logged and
/// swallowed so Telegram does not redeliver an update that was handled.
pub async fn process_update(state: &AppState, body: &[u8]) -> Result<(), WebhookError> {
    let update = Update::from_slice(body)?;

    let Some(reply) = state.handler.handle_update(&update).await else {
        return Ok(());
    };

    if let Err(e) = state.transport.send_message(reply.chat_id, &reply.text).await {
        error!(
            "Failed to deliver reply for update {} to chat {}: {}",
            update.update_id, reply.chat_id, e
        );
    }

    Ok(())
}

/// GET / - liveness
async fn handle_root() -> &'static str {
    ALIVE_MESSAGE
}

/// POST /webhook - Telegram update delivery
async fn handle_webhook(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    match process_update(&state, &body).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            error!("Webhook error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "error")
        }
    }
}

/// GET /set_webhook - register `<WEBHOOK_URL>/webhook` with Telegram
async fn handle_set_webhook(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(base_url) = state.webhook_url.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "WEBHOOK_URL not defined".to_owned(),
        );
    };

    let url = webhook_endpoint(base_url);
    match state.transport.set_webhook(&url).await {
        Ok(()) => {
            info!("Webhook configured at {}", url);
            (StatusCode::OK, format!("Webhook configured at {url}"))
        }
        Err(e) => {
            error!("Failed to configure webhook at {}: {}", url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to configure webhook".to_owned(),
            )
        }
    }
}
