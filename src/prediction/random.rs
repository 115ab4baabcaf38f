//! Random placeholder predictor.

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use super::{Prediction, PredictionError, Predictor, TrainingReport};

/// Placeholder predictor that draws every number uniformly at random.
///
/// It carries no predictive meaning. It stands in until a real scoring
/// model is plugged in through the [`Predictor`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPredictor;

impl RandomPredictor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Predictor for RandomPredictor {
    async fn train_sales_model(&self) -> Result<TrainingReport, PredictionError> {
        debug!("Simulating sales model training");
        let accuracy = rand::thread_rng().gen_range(0.70..=0.95);
        Ok(TrainingReport {
            status: "ok".to_owned(),
            accuracy,
        })
    }

    async fn predict_market_trend(&self, context: &str) -> Result<Prediction, PredictionError> {
        let (value, confidence) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(0.2..=0.9), rng.gen_range(0.5..=0.95))
        };

        Ok(Prediction::market_trend(
            value,
            confidence,
            format!("Prediction for {context}"),
            vec!["Invest".to_owned(), "Wait".to_owned()],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::PredictionKind;

    #[tokio::test]
    async fn test_training_accuracy_in_range() {
        let predictor = RandomPredictor::new();
        for _ in 0..50 {
            let report = predictor.train_sales_model().await.unwrap();
            assert_eq!(report.status, "ok");
            assert!((0.70..=0.95).contains(&report.accuracy));
        }
    }

    #[tokio::test]
    async fn test_prediction_ranges() {
        let predictor = RandomPredictor::new();
        for _ in 0..50 {
            let prediction = predictor.predict_market_trend("digital").await.unwrap();
            assert_eq!(prediction.kind, PredictionKind::MarketTrend);
            assert!((0.2..=0.9).contains(&prediction.value));
            assert!((0.5..=0.95).contains(&prediction.confidence));
        }
    }

    #[tokio::test]
    async fn test_prediction_explanation_and_recommendations() {
        let prediction = RandomPredictor::new()
            .predict_market_trend("digital")
            .await
            .unwrap();
        assert_eq!(prediction.explanation, "Prediction for digital");
        assert_eq!(prediction.recommendations, vec!["Invest", "Wait"]);
    }
}
