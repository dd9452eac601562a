//! Forecasting models and their result shape

use crate::noise::NoiseSource;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Which computation path produced a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Flat projection of the last known close
    #[serde(rename = "baseline")]
    Baseline,
    /// AR(1) recurrence on returns with a drift term
    #[serde(rename = "AR1_drift")]
    Ar1Drift,
}

impl ModelKind {
    /// Tag reported to callers
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Baseline => "baseline",
            ModelKind::Ar1Drift => "AR1_drift",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast result returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Symbol echoed from the request
    pub symbol: String,
    /// Model that produced the predictions
    pub model: ModelKind,
    /// One predicted price per future step
    pub predictions: Vec<f64>,
    /// Reserved quality metric, never populated
    pub accuracy: Option<f64>,
    /// Reserved quality metric, never populated
    pub r2_score: Option<f64>,
    /// Reserved quality metric, never populated
    pub mse: Option<f64>,
}

impl ForecastResult {
    /// Create a result with no quality metrics
    pub fn new(symbol: impl Into<String>, model: ModelKind, predictions: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            model,
            predictions,
            accuracy: None,
            r2_score: None,
            mse: None,
        }
    }

    /// Get the predicted values
    pub fn values(&self) -> &[f64] {
        &self.predictions
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.predictions.len()
    }
}

/// Common interface for forecasting models
///
/// Models are stateless: everything they need comes from the windowed closes
/// handed to [`ForecastModel::project`].
pub trait ForecastModel: Debug + Send + Sync {
    /// Tag of the computation path
    fn kind(&self) -> ModelKind;

    /// Project `horizon` future prices from `closes` (oldest first)
    fn project(&self, closes: &[f64], horizon: usize, noise: &mut dyn NoiseSource) -> Vec<f64>;
}

pub mod ar1_drift;
pub mod baseline;

pub use ar1_drift::Ar1Drift;
pub use baseline::ConstantBaseline;
