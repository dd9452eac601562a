//! Tunable constants of the forecaster

use crate::error::{ForecastError, Result};

/// Number of most recent closes considered
pub const DEFAULT_WINDOW: usize = 120;
/// AR(1) persistence coefficient
pub const DEFAULT_PHI: f64 = 0.15;
/// Share of the mean return applied as drift on every step
pub const DEFAULT_DRIFT_WEIGHT: f64 = 0.6;
/// Lowest price a projection may reach
pub const DEFAULT_PRICE_FLOOR: f64 = 0.01;
/// Baseline level when no close is available at all
pub const DEFAULT_FALLBACK_BASE: f64 = 100.0;

/// Parameters shared by the forecast models
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecasterParams {
    window: usize,
    phi: f64,
    drift_weight: f64,
    price_floor: f64,
    fallback_base: f64,
}

impl ForecasterParams {
    /// Create a validated parameter set
    pub fn new(
        window: usize,
        phi: f64,
        drift_weight: f64,
        price_floor: f64,
        fallback_base: f64,
    ) -> Result<Self> {
        if window < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "Window must cover at least 2 closes, got {}",
                window
            )));
        }
        if !(0.0..1.0).contains(&phi) {
            return Err(ForecastError::InvalidParameter(format!(
                "Phi must be in [0, 1), got {}",
                phi
            )));
        }
        if !drift_weight.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "Drift weight must be finite".to_string(),
            ));
        }
        if !(price_floor.is_finite() && price_floor > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Price floor must be positive, got {}",
                price_floor
            )));
        }
        if !(fallback_base.is_finite() && fallback_base > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Fallback base must be positive, got {}",
                fallback_base
            )));
        }

        Ok(Self {
            window,
            phi,
            drift_weight,
            price_floor,
            fallback_base,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn drift_weight(&self) -> f64 {
        self.drift_weight
    }

    pub fn price_floor(&self) -> f64 {
        self.price_floor
    }

    pub fn fallback_base(&self) -> f64 {
        self.fallback_base
    }
}

impl Default for ForecasterParams {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            phi: DEFAULT_PHI,
            drift_weight: DEFAULT_DRIFT_WEIGHT,
            price_floor: DEFAULT_PRICE_FLOOR,
            fallback_base: DEFAULT_FALLBACK_BASE,
        }
    }
}
