//! HTTP front end for the price forecaster.
//!
//! Exposes `POST /predict` and `GET /health`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use state::AppState;

pub const SERVICE_NAME: &str = "Stock ML Service";

/// Build the application router with its middleware stack.
pub fn app(state: Arc<AppState>) -> Router {
    routes::api_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
