//! HTTP route definitions and handlers.
//!
//! Routes are added through a [`RouteRegistry`] so the endpoint table in the
//! application state always matches what the router serves.

mod health_routes;
pub mod registry;
mod root_routes;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use registry::RouteRegistry;

use crate::state::{AppState, StartTime};
use crate::utils::http_helpers::{handle_panic, not_found, rewrite_method_not_allowed};

/// Registers every listed route of the service.
pub fn registry() -> RouteRegistry {
    let registry = RouteRegistry::default();
    let registry = root_routes::routes(registry);
    health_routes::routes(registry)
}

/// Creates the application router with all configured routes.
///
/// The endpoint table is frozen into the state before the first request,
/// then the error handlers are attached.
pub fn create_router(started: StartTime) -> Router {
    let (router, endpoints) = registry().into_parts();
    let state = AppState {
        started,
        endpoints: endpoints.into(),
    };

    with_error_handlers(router.with_state(state))
}

/// Attaches the JSON 404/405/500 handlers and request tracing.
pub fn with_error_handlers(router: Router) -> Router {
    router.fallback(not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::map_response(rewrite_method_not_allowed)),
    )
}
