//! Moment calculations over return series
//!
//! Sums are accumulated left to right and divided once, so the results are
//! reproducible to the bit for the same input order.

use crate::returns::simple_returns;
use crate::{MathError, Result};

/// Arithmetic mean of `values`
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot calculate mean of an empty series".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance of `values` around a precomputed `mean`
pub fn population_variance(values: &[f64], mean: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot calculate variance of an empty series".to_string(),
        ));
    }
    if !mean.is_finite() {
        return Err(MathError::InvalidInput(format!(
            "Mean must be finite, got {}",
            mean
        )));
    }

    let sum_sq: f64 = values
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum();

    Ok(sum_sq / values.len() as f64)
}

/// Summary of a return series used to drive forecast recurrences
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReturnMoments {
    /// Mean return
    pub mu: f64,
    /// Population variance of returns
    pub variance: f64,
    /// Volatility (square root of the variance)
    pub sigma: f64,
    /// Most recent return
    pub last: f64,
    /// Number of returns the moments were computed from
    pub count: usize,
}

impl ReturnMoments {
    /// Summarize a return series. Every field is zero when `returns` is empty.
    pub fn from_returns(returns: &[f64]) -> Self {
        let mu = mean(returns).unwrap_or(0.0);
        let variance = population_variance(returns, mu).unwrap_or(0.0);

        Self {
            mu,
            variance,
            sigma: variance.sqrt(),
            last: returns.last().copied().unwrap_or(0.0),
            count: returns.len(),
        }
    }

    /// Summarize the simple returns of a close series
    pub fn from_closes(closes: &[f64]) -> Self {
        Self::from_returns(&simple_returns(closes))
    }

    /// Whether any return contributed to the moments
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
