//! Health check endpoints.

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::any;
use axum::{Json, Router};

use crate::models::{HealthCheckResponse, HttpMethod};
use crate::routes::registry::RouteRegistry;
use crate::state::AppState;

/// Registers health check routes.
///
/// `/health` without the trailing slash redirects to the canonical path.
pub fn routes(registry: RouteRegistry) -> RouteRegistry {
    registry
        .route("/health/", HttpMethod::Get, "Health check endpoint", health_check)
        .unlisted(Router::new().route("/health", any(redirect_to_canonical)))
}

/// Reports a static status and the process uptime.
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy(state.started.uptime_seconds()))
}

async fn redirect_to_canonical() -> Redirect {
    Redirect::temporary("/health/")
}
