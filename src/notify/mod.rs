//! Push notifications through Firebase Cloud Messaging.
//!
//! Independent of the message flow: nothing in the webhook path waits on
//! a notification.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::PushConfig;

/// Errors that can occur while sending a push notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FCM rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Device token must not be empty")]
    EmptyToken,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SendRequest<'a> {
    message: PushMessage<'a>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PushMessage<'a> {
    token: &'a str,
    notification: Notification<'a>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Notification<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    name: String,
}

/// Sends notifications to single devices.
pub struct PushNotifier {
    client: reqwest::Client,
    config: PushConfig,
    endpoint: String,
}

impl PushNotifier {
    /// Creates a notifier for a Firebase project.
    #[must_use]
    pub fn new(config: PushConfig) -> Self {
        let endpoint = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            config.project_id
        );
        Self {
            client: reqwest::Client::new(),
            config,
            endpoint,
        }
    }

    /// Sends a notification to a device token.
    ///
    /// Returns the message name assigned by FCM.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the request fails, or FCM
    /// rejects the message.
    pub async fn send(&self, token: &str, title: &str, body: &str) -> Result<String, NotifyError> {
        let request = build_request(token, title, body)?;
        debug!("Sending push notification \"{}\"", title);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let SendResponse { name } = response.json().await?;
        info!("Push notification sent: {}", name);
        Ok(name)
    }
}

impl std::fmt::Debug for PushNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushNotifier")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

fn build_request<'a>(
    token: &'a str,
    title: &'a str,
    body: &'a str,
) -> Result<SendRequest<'a>, NotifyError> {
    if token.trim().is_empty() {
        return Err(NotifyError::EmptyToken);
    }

    Ok(SendRequest {
        message: PushMessage {
            token,
            notification: Notification { title, body },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PushConfig {
        PushConfig {
            project_id: "neurahive".to_owned(),
            access_token: "ya29.secret".to_owned(),
        }
    }

    #[test]
    fn test_endpoint() {
        let notifier = PushNotifier::new(config());
        assert_eq!(
            notifier.endpoint,
            "https://fcm.googleapis.com/v1/projects/neurahive/messages:send"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = build_request("device-1", "Market", "Time to buy").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "message": {
                    "token": "device-1",
                    "notification": {"title": "Market", "body": "Time to buy"}
                }
            })
        );
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            build_request("  ", "t", "b"),
            Err(NotifyError::EmptyToken)
        ));
    }

    #[test]
    fn test_debug_hides_access_token() {
        let notifier = PushNotifier::new(config());
        assert!(!format!("{notifier:?}").contains("ya29.secret"));
    }
}
