//! HTTP routes for the forecast API.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use price_forecast::{ForecastRequest, ForecastResult};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::state::AppState;
use crate::SERVICE_NAME;

/// Assemble the API router.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
}

/// POST /predict: project `days` future closes from the supplied history.
async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<ForecastResult>, ServiceError> {
    let Json(request) = payload?;
    if request.days > state.config.max_days {
        return Err(ServiceError::Unprocessable(format!(
            "days must not exceed {}, got {}",
            state.config.max_days, request.days
        )));
    }
    request.validate()?;

    let result = state.forecaster.forecast(&request);
    tracing::info!(
        symbol = %result.symbol,
        model = %result.model,
        closes = request.closes.len(),
        predictions = result.predictions.len(),
        "forecast served"
    );

    Ok(Json(result))
}

/// GET /health: liveness probe.
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "engine": price_forecast::NAME,
        "engine_version": price_forecast::VERSION,
        "window": state.forecaster.params().window(),
        "max_days": state.config.max_days,
    }))
}
