//! State shared across request handlers.

use std::sync::Arc;

use price_forecast::Forecaster;

use crate::config::ServiceConfig;

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub config: ServiceConfig,
    pub forecaster: Forecaster,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Arc<Self> {
        let forecaster = Forecaster::new(config.forecaster);
        Arc::new(Self { config, forecaster })
    }
}
