//! Entry point that windows the history and dispatches to a model

use crate::data::ForecastRequest;
use crate::models::{Ar1Drift, ConstantBaseline, ForecastModel, ForecastResult};
use crate::noise::{NoNoise, NoiseSource};
use crate::params::ForecasterParams;
use trade_math::window_tail;

/// Stateless forecaster
///
/// Holds only immutable parameters, so a single instance can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Forecaster {
    params: ForecasterParams,
    baseline: ConstantBaseline,
    ar1: Ar1Drift,
}

impl Forecaster {
    pub fn new(params: ForecasterParams) -> Self {
        Self {
            params,
            baseline: ConstantBaseline::new(params.fallback_base()),
            ar1: Ar1Drift::new(&params),
        }
    }

    pub fn params(&self) -> &ForecasterParams {
        &self.params
    }

    /// Deterministic forecast for `request`
    pub fn forecast(&self, request: &ForecastRequest) -> ForecastResult {
        self.forecast_with_noise(request, &mut NoNoise)
    }

    /// Forecast with `noise` supplying the per-step `eps` term
    ///
    /// Fewer than two closes in the window fall back to the flat baseline.
    pub fn forecast_with_noise(
        &self,
        request: &ForecastRequest,
        noise: &mut dyn NoiseSource,
    ) -> ForecastResult {
        let closes = window_tail(&request.closes, self.params.window());
        let horizon = request.horizon();

        let model: &dyn ForecastModel = if closes.len() < 2 {
            &self.baseline
        } else {
            &self.ar1
        };

        tracing::debug!(
            symbol = %request.symbol,
            model = %model.kind(),
            closes = closes.len(),
            horizon,
            "running forecast"
        );

        let predictions = model.project(closes, horizon, noise);
        ForecastResult::new(request.symbol.clone(), model.kind(), predictions)
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ForecasterParams::default())
    }
}

/// Forecast `request` with the default parameters
pub fn forecast(request: &ForecastRequest) -> ForecastResult {
    Forecaster::default().forecast(request)
}
