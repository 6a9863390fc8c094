//! Health-check responder.

use std::sync::Arc;

use axum::Json;
use axum::extract::{OriginalUri, State};
use axum::http::Method;
use common::{Clock, PingPayload};

/// Shared state for the ping routes.
#[derive(Debug)]
pub struct AppState<C> {
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// Label value for `method`. Extension methods share `OTHER` so clients
/// cannot mint new series.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        "OPTIONS" => "OPTIONS",
        _ => "OTHER",
    }
}

/// ANY /api/ping — echoes the request URL with the current time.
///
/// Never fails: method, headers and body are ignored.
pub async fn ping<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Json<PingPayload> {
    let ts = state.clock.now_millis();
    let url = uri.to_string();

    metrics::counter!("ping_requests_total", "method" => method_label(&method)).increment(1);
    tracing::debug!(%method, %url, ts, "ping");

    Json(PingPayload::new(ts, url))
}
