//! Decision core of the bot.
//!
//! [`HiveMind`] owns the immutable personality table and the predictor.
//! It decides which personality answers a message and what that
//! personality says.

mod responder;
mod selector;

use std::sync::Arc;

use tracing::{error, info};

pub use responder::{PAYMENT_COMMAND, generate_response};
pub use selector::{COMMANDER_THRESHOLD, SAGE_THRESHOLD, derive_score, select_personality};

use crate::config::{PersonalityKey, PersonalityRecord, PersonalityTable};
use crate::prediction::{Prediction, Predictor};

/// Context passed to the predictor by [`HiveMind::awaken`].
pub const MARKET_CONTEXT: &str = "digital";

/// Personality routing and reply generation.
pub struct HiveMind {
    personalities: PersonalityTable,
    predictor: Arc<dyn Predictor>,
}

impl HiveMind {
    /// Creates a hive mind over a loaded personality table.
    #[must_use]
    pub fn new(personalities: PersonalityTable, predictor: Arc<dyn Predictor>) -> Self {
        Self {
            personalities,
            predictor,
        }
    }

    /// The personality table.
    #[must_use]
    pub const fn personalities(&self) -> &PersonalityTable {
        &self.personalities
    }

    /// Runs one train-then-predict cycle.
    ///
    /// Training failures are logged and ignored. A failed prediction is
    /// replaced by [`Prediction::neutral_fallback`], so this never fails.
    pub async fn awaken(&self) -> Prediction {
        info!("Training sales model...");
        match self.predictor.train_sales_model().await {
            Ok(report) => info!(
                "Training completed: status={}, accuracy={:.3}",
                report.status, report.accuracy
            ),
            Err(e) => error!("Training error: {}", e),
        }

        match self.predictor.predict_market_trend(MARKET_CONTEXT).await {
            Ok(prediction) => {
                info!(
                    "Market prediction: {:.3} (confidence: {:.3})",
                    prediction.value, prediction.confidence
                );
                prediction
            }
            Err(e) => {
                error!("Prediction error: {}", e);
                Prediction::neutral_fallback()
            }
        }
    }

    /// Selects the personality for a score and message text.
    #[must_use]
    pub fn select(&self, score: f64, text: &str) -> (PersonalityKey, &PersonalityRecord) {
        let key = select_personality(score, text);
        (key, self.personalities.get(key))
    }

    /// Generates the reply of a personality to a message.
    #[must_use]
    pub fn generate(&self, key: PersonalityKey, text: &str) -> String {
        generate_response(key, self.personalities.get(key), text)
    }

    /// Scores, routes and answers a free-text message.
    #[must_use]
    pub fn respond(&self, text: &str) -> (PersonalityKey, String) {
        let score = derive_score(text);
        let key = select_personality(score, text);
        (key, self.generate(key, text))
    }
}

impl std::fmt::Debug for HiveMind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiveMind")
            .field("personalities", &self.personalities)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::prediction::{Prediction, PredictionError, Predictor, TrainingReport};

    /// Predictor returning a fixed value.
    pub struct FixedPredictor(pub f64);

    #[async_trait]
    impl Predictor for FixedPredictor {
        async fn train_sales_model(&self) -> Result<TrainingReport, PredictionError> {
            Ok(TrainingReport {
                status: "ok".to_owned(),
                accuracy: 0.9,
            })
        }

        async fn predict_market_trend(&self, context: &str) -> Result<Prediction, PredictionError> {
            Ok(Prediction::market_trend(self.0, 0.8, context, Vec::new()))
        }
    }

    /// Predictor whose every call fails.
    pub struct FailingPredictor;

    #[async_trait]
    impl Predictor for FailingPredictor {
        async fn train_sales_model(&self) -> Result<TrainingReport, PredictionError> {
            Err(PredictionError::Training("no data".to_owned()))
        }

        async fn predict_market_trend(&self, _context: &str) -> Result<Prediction, PredictionError> {
            Err(PredictionError::Inference("model offline".to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingPredictor, FixedPredictor};
    use super::*;
    use crate::prediction::RandomPredictor;

    fn mind() -> HiveMind {
        HiveMind::new(PersonalityTable::default(), Arc::new(RandomPredictor::new()))
    }

    #[test]
    fn test_buy_message_end_to_end() {
        let text = "I want to buy now";
        assert!((derive_score(text) - 0.8).abs() < f64::EPSILON);

        let (key, reply) = mind().respond(text);
        assert_eq!(key, PersonalityKey::Commander);
        assert!(reply.starts_with("🔥 [COMMANDER]: "));
        assert!(reply.contains(PAYMENT_COMMAND));
    }

    #[test]
    fn test_problem_message_end_to_end() {
        let (key, reply) = mind().respond("I have a problem");
        assert_eq!(key, PersonalityKey::Sage);
        assert!(reply.starts_with("🧠 [SAGE]: "));
    }

    #[test]
    fn test_new_idea_message_end_to_end() {
        let (key, reply) = mind().respond("new idea please");
        assert_eq!(key, PersonalityKey::Disruptor);
        assert!(reply.contains("Innovation"));
    }

    #[test]
    fn test_plain_message_end_to_end() {
        let (key, reply) = mind().respond("good morning");
        assert_eq!(key, PersonalityKey::Neutral);
        assert!(reply.contains("Balance"));
    }

    #[test]
    fn test_generate_uses_table_record() {
        let reply = mind().generate(PersonalityKey::Sage, "hello");
        assert_eq!(
            reply,
            "🧠 [SAGE]: I have analysed your message. My neural network suggests: 'Analysis'."
        );
    }

    #[test]
    fn test_select_returns_matching_record() {
        let mind = mind();
        let (key, record) = mind.select(0.9, "");
        assert_eq!(key, PersonalityKey::Commander);
        assert_eq!(record.operating_style, "Control");
    }

    #[tokio::test]
    async fn test_awaken_returns_prediction() {
        let mind = HiveMind::new(PersonalityTable::default(), Arc::new(FixedPredictor(0.85)));
        let prediction = mind.awaken().await;
        assert!((prediction.value - 0.85).abs() < f64::EPSILON);
        assert_eq!(prediction.explanation, MARKET_CONTEXT);
    }

    #[tokio::test]
    async fn test_awaken_falls_back_on_failure() {
        let mind = HiveMind::new(PersonalityTable::default(), Arc::new(FailingPredictor));
        let prediction = mind.awaken().await;
        assert!((prediction.value - 0.5).abs() < f64::EPSILON);
        assert!((prediction.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(prediction.explanation, "Error");
    }
}
