//! HTTP health-check responder.
//!
//! Every request to the ping routes gets `200 OK` with a JSON body
//! `{"ok":true,"ts":<millis>,"url":"<request url>"}`. The server also
//! exposes Prometheus metrics and logs through `tracing`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get};
use common::{Clock, SystemClock};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{ConfigError, ServerError};
pub use routes::ping::AppState;

/// Path a serverless platform assigns to an `api/ping` function.
pub const PING_PATH: &str = "/api/ping";

/// Short alias for deployments without the `/api` prefix.
pub const PING_ALIAS_PATH: &str = "/ping";

/// Creates the Axum router with the ping and metrics routes.
pub fn create_app<C: Clock>(state: Arc<AppState<C>>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route(PING_PATH, any(routes::ping::ping::<C>))
        .route(PING_ALIAS_PATH, any(routes::ping::ping::<C>))
        .with_state(state)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by the system clock.
pub fn create_default_state() -> Arc<AppState<SystemClock>> {
    Arc::new(AppState::new(SystemClock))
}
