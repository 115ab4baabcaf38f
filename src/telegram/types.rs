//! Bot API update types (the subset the webhook uses).

use serde::{Deserialize, Serialize};

/// An incoming update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

impl Update {
    /// Parses an update from a webhook body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Parses an update from raw webhook bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Chat ID and text of the update, if it is a text message.
    #[must_use]
    pub fn text_message(&self) -> Option<(i64, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        Some((message.chat.id, text))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
    pub date: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_message() {
        let body = r#"{
            "update_id": 10,
            "message": {
                "message_id": 1,
                "from": {"id": 42, "is_bot": false, "first_name": "Ana", "username": "ana"},
                "chat": {"id": 42, "type": "private"},
                "text": "hola",
                "date": 1700000000
            }
        }"#;
        let update = Update::from_json(body).unwrap();
        assert_eq!(update.update_id, 10);
        assert_eq!(update.text_message(), Some((42, "hola")));
        let from = update.message.unwrap().from.unwrap();
        assert_eq!(from.username.as_deref(), Some("ana"));
    }

    #[test]
    fn test_parse_update_without_message() {
        let update = Update::from_json(r#"{"update_id": 11}"#).unwrap();
        assert!(update.message.is_none());
        assert!(update.text_message().is_none());
    }

    #[test]
    fn test_parse_message_without_text() {
        let body = r#"{
            "update_id": 12,
            "message": {
                "message_id": 2,
                "chat": {"id": -100, "type": "supergroup"},
                "date": 1700000001
            }
        }"#;
        let update = Update::from_json(body).unwrap();
        assert!(update.text_message().is_none());
        assert_eq!(update.message.unwrap().chat.chat_type, "supergroup");
    }

    #[test]
    fn test_parse_invalid_body() {
        assert!(Update::from_json("not json").is_err());
        assert!(Update::from_slice(&[0xff, 0xfe, b'{']).is_err());
        assert!(Update::from_json(r#"{"message": {}}"#).is_err());
    }
}
