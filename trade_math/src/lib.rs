//! # Trade Math
//!
//! Arithmetic over closing price histories used by the forecasting crates.
//! This crate provides the windowing, simple return and moment calculations
//! that feed the forecast recurrences.

use thiserror::Error;

pub mod moments;
pub mod returns;

pub use moments::{mean, population_variance, ReturnMoments};
pub use returns::{simple_returns, window_tail};

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;
