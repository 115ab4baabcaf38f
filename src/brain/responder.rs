//! Templated reply generation.

use super::selector::contains_any;
use crate::config::{PersonalityKey, PersonalityRecord};

/// Command that opens the payment link.
pub const PAYMENT_COMMAND: &str = "/pay";

const PURCHASE_KEYWORDS: &[&str] = &["price", "buy"];
const HELP_KEYWORDS: &[&str] = &["help"];

/// Builds the reply a personality gives to a message.
///
/// The reply always starts with `"<emoji> [<KEY>]: "`. What follows depends
/// on the message: purchase intent points at [`PAYMENT_COMMAND`], a request
/// for help gets an offer of guidance, and anything else echoes the
/// personality's operating style.
#[must_use]
pub fn generate_response(key: PersonalityKey, record: &PersonalityRecord, text: &str) -> String {
    let prefix = format!("{} [{}]: ", record.emoji, key);
    let text = text.to_lowercase();

    let body = if contains_any(&text, PURCHASE_KEYWORDS) {
        format!(
            "I detect purchase intent. According to my predictive models, this is exactly \
             the right moment. Here is your priority link: {PAYMENT_COMMAND}"
        )
    } else if contains_any(&text, HELP_KEYWORDS) {
        "I'm here to guide you. What do you need?".to_owned()
    } else {
        let style = match record.operating_style.trim() {
            "" => "proceed",
            style => style,
        };
        format!("I have analysed your message. My neural network suggests: '{style}'.")
    };

    prefix + &body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PersonalityTable;

    #[test]
    fn test_prefix_has_emoji_and_key() {
        let table = PersonalityTable::default();
        for (key, record) in table.iter() {
            for text in ["", "hello", "buy", "help me"] {
                let reply = generate_response(key, record, text);
                assert!(reply.starts_with(&format!("{} [{}]: ", record.emoji, key)));
                assert!(reply.len() > record.emoji.len() + key.as_str().len() + 4);
            }
        }
    }

    #[test]
    fn test_purchase_intent_references_payment_command() {
        let table = PersonalityTable::default();
        let record = table.get(PersonalityKey::Commander);
        assert!(generate_response(PersonalityKey::Commander, record, "I want to buy").contains("/pay"));
        assert!(generate_response(PersonalityKey::Commander, record, "what's the PRICE?").contains("/pay"));
    }

    #[test]
    fn test_help_offer() {
        let table = PersonalityTable::default();
        let reply = generate_response(
            PersonalityKey::Neutral,
            table.get(PersonalityKey::Neutral),
            "Help!",
        );
        assert!(reply.ends_with("I'm here to guide you. What do you need?"));
        assert!(!reply.contains("/pay"));
    }

    #[test]
    fn test_purchase_takes_precedence_over_help() {
        let table = PersonalityTable::default();
        let reply = generate_response(
            PersonalityKey::Sage,
            table.get(PersonalityKey::Sage),
            "help me buy",
        );
        assert!(reply.contains("/pay"));
    }

    #[test]
    fn test_default_reply_uses_operating_style() {
        let table = PersonalityTable::default();
        let reply = generate_response(
            PersonalityKey::Disruptor,
            table.get(PersonalityKey::Disruptor),
            "tell me something",
        );
        assert_eq!(
            reply,
            "🌱 [DISRUPTOR]: I have analysed your message. My neural network suggests: 'Innovation'."
        );
    }

    #[test]
    fn test_empty_operating_style_falls_back() {
        let record = PersonalityRecord::default();
        let reply = generate_response(PersonalityKey::Neutral, &record, "hi");
        assert_eq!(
            reply,
            " [NEUTRAL]: I have analysed your message. My neural network suggests: 'proceed'."
        );
    }
}
