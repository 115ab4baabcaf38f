//! Market prediction module.
//!
//! Defines the [`Predictor`] seam the bot scores against, and a random
//! placeholder implementation of it.

mod random;
mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use random::RandomPredictor;
pub use types::{Prediction, PredictionKind, TrainingReport};

/// Errors a predictor may report.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model training failed: {0}")]
    Training(String),

    #[error("Prediction failed: {0}")]
    Inference(String),
}

/// A source of market predictions.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Trains (or refreshes) the sales model.
    async fn train_sales_model(&self) -> Result<TrainingReport, PredictionError>;

    /// Predicts the market trend for the given context.
    async fn predict_market_trend(&self, context: &str) -> Result<Prediction, PredictionError>;
}
