//! AR(1) recurrence on simple returns with a constant drift

use crate::models::{ForecastModel, ModelKind};
use crate::noise::NoiseSource;
use crate::params::ForecasterParams;
use trade_math::ReturnMoments;

/// AR(1)-with-drift price projection
///
/// Each step blends the previous AR term toward the mean return,
/// `ar = phi * ar + (1 - phi) * mu`, then applies
/// `r = mu * drift_weight + ar + eps` to the running price, which is never
/// allowed below the price floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ar1Drift {
    phi: f64,
    drift_weight: f64,
    price_floor: f64,
}

impl Ar1Drift {
    pub fn new(params: &ForecasterParams) -> Self {
        Self {
            phi: params.phi(),
            drift_weight: params.drift_weight(),
            price_floor: params.price_floor(),
        }
    }

    /// Run the recurrence from precomputed moments, starting at `last_close`
    pub fn project_from(
        &self,
        moments: &ReturnMoments,
        last_close: f64,
        horizon: usize,
        noise: &mut dyn NoiseSource,
    ) -> Vec<f64> {
        let mu = moments.mu;
        let mut ar = moments.last;
        let mut last = last_close;

        (0..horizon)
            .map(|step| {
                let drift = mu * self.drift_weight;
                ar = self.phi * ar + (1.0 - self.phi) * mu;
                let eps = noise.sample(step, moments.sigma);
                let r = drift + ar + eps;
                last = (last * (1.0 + r)).max(self.price_floor);
                last
            })
            .collect()
    }
}

impl ForecastModel for Ar1Drift {
    fn kind(&self) -> ModelKind {
        ModelKind::Ar1Drift
    }

    fn project(&self, closes: &[f64], horizon: usize, noise: &mut dyn NoiseSource) -> Vec<f64> {
        let Some(&last_close) = closes.last() else {
            return Vec::new();
        };

        let moments = ReturnMoments::from_closes(closes);
        tracing::debug!(
            mu = moments.mu,
            sigma = moments.sigma,
            returns = moments.count,
            "estimated return moments"
        );

        self.project_from(&moments, last_close, horizon, noise)
    }
}
