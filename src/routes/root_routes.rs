//! Service information endpoint.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::models::{
    ApiInfoResponse, HttpMethod, RequestInfo, RuntimeInfo, ServiceInfo, SystemInfo,
};
use crate::routes::registry::RouteRegistry;
use crate::state::AppState;

/// Registers the root route.
pub fn routes(registry: RouteRegistry) -> RouteRegistry {
    registry.route("/", HttpMethod::Get, "Get API information", get_api_info)
}

/// Describes the service, its host, its uptime, the calling request and
/// every registered endpoint.
async fn get_api_info(
    State(state): State<AppState>,
    request: RequestInfo,
) -> Json<ApiInfoResponse> {
    debug!(client_ip = %request.client_ip, path = %request.path, "Serving API information");

    Json(ApiInfoResponse {
        service: ServiceInfo::current(),
        system: SystemInfo::collect(),
        runtime: RuntimeInfo::since(&state.started),
        request,
        endpoints: state.endpoints.to_vec(),
    })
}
