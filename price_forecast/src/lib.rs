//! # Price Forecast
//!
//! Deterministic multi-step price forecasts from a closing price history.
//!
//! ## Models
//!
//! - **baseline**: fewer than two closes are available, so the last close
//!   (or a fallback level) is repeated for every step
//! - **AR1_drift**: mean and last simple return drive an AR(1) recurrence
//!   with persistence `phi`, plus a drift proportional to the mean return
//!
//! Only the most recent 120 closes are considered by default and projected
//! prices never drop below 0.01.
//!
//! ## Quick Start
//!
//! ```rust
//! use price_forecast::{forecast, ForecastRequest, ModelKind};
//!
//! let request = ForecastRequest::new("AAPL", 5, vec![100.0, 101.0, 102.5]);
//! let result = forecast(&request);
//!
//! assert_eq!(result.model, ModelKind::Ar1Drift);
//! assert_eq!(result.predictions.len(), 5);
//! ```

pub mod data;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod noise;
pub mod params;

// Re-export commonly used types
pub use crate::data::ForecastRequest;
pub use crate::error::ForecastError;
pub use crate::forecaster::{forecast, Forecaster};
pub use crate::models::{ForecastModel, ForecastResult, ModelKind};
pub use crate::noise::{GaussianNoise, NoNoise, NoiseSource};
pub use crate::params::ForecasterParams;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
