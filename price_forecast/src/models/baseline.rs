//! Flat baseline used when the history is too short to estimate returns

use crate::models::{ForecastModel, ModelKind};
use crate::noise::NoiseSource;

/// Repeats the last close, or a fallback level when there is none
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantBaseline {
    fallback: f64,
}

impl ConstantBaseline {
    pub fn new(fallback: f64) -> Self {
        Self { fallback }
    }

    /// Level the projection is held at for `closes`
    pub fn base(&self, closes: &[f64]) -> f64 {
        closes.last().copied().unwrap_or(self.fallback)
    }
}

impl ForecastModel for ConstantBaseline {
    fn kind(&self) -> ModelKind {
        ModelKind::Baseline
    }

    fn project(&self, closes: &[f64], horizon: usize, _noise: &mut dyn NoiseSource) -> Vec<f64> {
        vec![self.base(closes); horizon]
    }
}
