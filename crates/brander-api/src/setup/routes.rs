//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use brander_core::Config;
use brander_infra::{cors_headers_middleware, request_id_middleware};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let request_timeout = Duration::from_secs(config.request_timeout_secs());
    tracing::info!(
        request_timeout_secs = request_timeout.as_secs(),
        max_body_size_bytes = config.max_body_size_bytes(),
        "HTTP limits configured"
    );

    Router::new()
        .route("/presign", post(handlers::presign::presign))
        .route("/brand", post(handlers::brand::brand))
        .route("/health", get(handlers::health::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_size_bytes()))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(setup_cors())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn(cors_headers_middleware))
}

/// Preflight handling; the header values on every response come from `cors_headers_middleware`
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
