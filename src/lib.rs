//! # Stock ML
//!
//! Umbrella crate for the stock forecasting workspace.
//!
//! - [`trade_math`]: windowing, simple returns and return moments
//! - [`price_forecast`]: the AR(1)-with-drift forecaster and its data model
//!
//! The HTTP front end lives in the `forecast_service` binary crate.
//!
//! ## Example
//!
//! ```
//! use stock_ml_workspace::price_forecast::{forecast, ForecastRequest, ModelKind};
//!
//! let result = forecast(&ForecastRequest::new("TSLA", 3, vec![]));
//! assert_eq!(result.model, ModelKind::Baseline);
//! assert_eq!(result.predictions, vec![100.0; 3]);
//! ```

pub use price_forecast;
pub use trade_math;
