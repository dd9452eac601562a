//! Forecast request payload

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Horizon used when a request does not name one
pub const DEFAULT_DAYS: i64 = 30;

fn default_days() -> i64 {
    DEFAULT_DAYS
}

/// A price history to project forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Instrument identifier, echoed back untouched
    pub symbol: String,
    /// Number of steps to project. Zero or negative yields no predictions.
    #[serde(default = "default_days")]
    pub days: i64,
    /// Closing prices, oldest first
    pub closes: Vec<f64>,
    /// Traded volumes aligned with `closes`. Accepted but not used yet.
    #[serde(default)]
    pub volumes: Option<Vec<f64>>,
    /// Free-form side channel for future model inputs. Accepted but not used yet.
    #[serde(default)]
    pub features: Option<Map<String, Value>>,
}

impl ForecastRequest {
    /// Create a request without volumes or features
    pub fn new(symbol: impl Into<String>, days: i64, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            days,
            closes,
            volumes: None,
            features: None,
        }
    }

    /// Number of forecast steps, with negative horizons treated as zero
    pub fn horizon(&self) -> usize {
        usize::try_from(self.days).unwrap_or(0)
    }

    /// Check that every numeric series holds finite values
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.closes.iter().position(|c| !c.is_finite()) {
            return Err(ForecastError::ValidationError(format!(
                "closes[{}] is not a finite number",
                index
            )));
        }

        if let Some(volumes) = &self.volumes {
            if let Some(index) = volumes.iter().position(|v| !v.is_finite()) {
                return Err(ForecastError::ValidationError(format!(
                    "volumes[{}] is not a finite number",
                    index
                )));
            }
        }

        Ok(())
    }
}
