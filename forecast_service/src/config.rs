//! Environment-driven service configuration.

use std::env;
use std::net::SocketAddr;

use price_forecast::params::{
    DEFAULT_DRIFT_WEIGHT, DEFAULT_FALLBACK_BASE, DEFAULT_PHI, DEFAULT_PRICE_FLOOR, DEFAULT_WINDOW,
};
use price_forecast::ForecasterParams;

use crate::error::ServiceError;

/// Longest horizon a single request may ask for.
pub const DEFAULT_MAX_DAYS: i64 = 3650;

/// Service configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: String,
    pub port: u16,
    /// Requests asking for more steps are rejected before forecasting.
    pub max_days: i64,
    pub forecaster: ForecasterParams,
}

fn lookup_str(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn lookup_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    lookup(name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unparsable values fall back to their defaults; parsed values that the
    /// forecaster rejects are reported as a config error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
        let forecaster = ForecasterParams::new(
            lookup_parse(&lookup, "ML_WINDOW", DEFAULT_WINDOW),
            lookup_parse(&lookup, "ML_PHI", DEFAULT_PHI),
            lookup_parse(&lookup, "ML_DRIFT_WEIGHT", DEFAULT_DRIFT_WEIGHT),
            lookup_parse(&lookup, "ML_PRICE_FLOOR", DEFAULT_PRICE_FLOOR),
            lookup_parse(&lookup, "ML_FALLBACK_BASE", DEFAULT_FALLBACK_BASE),
        )?;

        let max_days = lookup_parse(&lookup, "ML_MAX_DAYS", DEFAULT_MAX_DAYS);
        if max_days < 1 {
            return Err(ServiceError::Config(format!(
                "ML_MAX_DAYS must be at least 1, got {max_days}"
            )));
        }

        Ok(Self {
            bind: lookup_str(&lookup, "ML_BIND", "127.0.0.1"),
            port: lookup_parse(&lookup, "ML_PORT", 8000),
            max_days,
            forecaster,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServiceError> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| ServiceError::Config(format!("invalid bind address {}: {e}", self.bind)))
    }
}
