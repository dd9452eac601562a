//! Noise hook for the per-step return
//!
//! The forecast recurrence adds `eps` to every step return. The default
//! source returns 0.0 so forecasts stay deterministic. A [`NoiseSource`] can
//! be injected to perturb the path without touching the recurrence itself.

use crate::error::{ForecastError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Source of the `eps` term added to each step return
pub trait NoiseSource {
    /// Perturbation for zero-based `step`, given the historical volatility `sigma`
    fn sample(&mut self, step: usize, sigma: f64) -> f64;
}

/// Always 0.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn sample(&mut self, _step: usize, _sigma: f64) -> f64 {
        0.0
    }
}

impl<F> NoiseSource for F
where
    F: FnMut(usize, f64) -> f64,
{
    fn sample(&mut self, step: usize, sigma: f64) -> f64 {
        self(step, sigma)
    }
}

/// Gaussian noise `N(0, (scale * sigma)^2)` from a seeded generator
///
/// Two sources built with the same seed and scale produce the same sequence.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    rng: StdRng,
    scale: f64,
}

impl GaussianNoise {
    pub fn new(seed: u64, scale: f64) -> Result<Self> {
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Noise scale must be a non-negative number, got {}",
                scale
            )));
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            scale,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl NoiseSource for GaussianNoise {
    fn sample(&mut self, _step: usize, sigma: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * sigma * self.scale
    }
}
