//! Prediction value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a prediction is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    MarketTrend,
    UserBehavior,
}

/// A single prediction produced by a [`Predictor`](super::Predictor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Category of the prediction.
    pub kind: PredictionKind,

    /// Predicted value in `[0, 1]`.
    pub value: f64,

    /// Confidence in `[0, 1]`.
    pub confidence: f64,

    /// When the prediction was made.
    pub timestamp: DateTime<Utc>,

    /// Free-text explanation.
    pub explanation: String,

    /// Ordered recommendations.
    pub recommendations: Vec<String>,
}

impl Prediction {
    /// Creates a market-trend prediction stamped with the current time.
    #[must_use]
    pub fn market_trend(
        value: f64,
        confidence: f64,
        explanation: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            kind: PredictionKind::MarketTrend,
            value,
            confidence,
            timestamp: Utc::now(),
            explanation: explanation.into(),
            recommendations,
        }
    }

    /// The neutral prediction substituted when the predictor fails.
    #[must_use]
    pub fn neutral_fallback() -> Self {
        Self::market_trend(0.5, 0.5, "Error", Vec::new())
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Status label (e.g. "ok").
    pub status: String,

    /// Reported accuracy in `[0, 1]`.
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_fallback() {
        let prediction = Prediction::neutral_fallback();
        assert_eq!(prediction.kind, PredictionKind::MarketTrend);
        assert!((prediction.value - 0.5).abs() < f64::EPSILON);
        assert!((prediction.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(prediction.explanation, "Error");
        assert!(prediction.recommendations.is_empty());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PredictionKind::MarketTrend).unwrap(),
            "\"market_trend\""
        );
        assert_eq!(
            serde_json::to_string(&PredictionKind::UserBehavior).unwrap(),
            "\"user_behavior\""
        );
    }
}
