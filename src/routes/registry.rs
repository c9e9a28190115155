//! Route registration that records what it registers.

use axum::handler::Handler;
use axum::routing::on;
use axum::Router;

use crate::models::{Endpoint, HttpMethod};
use crate::state::AppState;

/// Builds the axum router and the endpoint table in one pass.
///
/// Every route added with [`RouteRegistry::route`] lands in both, so the
/// table reported by `GET /` cannot drift from what is actually served.
#[derive(Default)]
pub struct RouteRegistry {
    router: Router<AppState>,
    endpoints: Vec<Endpoint>,
}

impl RouteRegistry {
    /// Serve `handler` for `method` on `path` and list it as an endpoint.
    pub fn route<H, T>(
        mut self,
        path: &str,
        method: HttpMethod,
        description: &str,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.router = self.router.route(path, on(method.into(), handler));
        self.endpoints.push(Endpoint {
            path: path.to_string(),
            method,
            description: description.to_string(),
        });
        self
    }

    /// Serve routes that are not listed as endpoints, such as redirects.
    pub fn unlisted(mut self, router: Router<AppState>) -> Self {
        self.router = self.router.merge(router);
        self
    }

    pub fn into_parts(self) -> (Router<AppState>, Vec<Endpoint>) {
        (self.router, self.endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Redirect;
    use axum::routing::get;

    async fn noop() -> &'static str {
        "ok"
    }

    #[test]
    fn records_each_route_and_method_in_order() {
        let (_router, endpoints) = RouteRegistry::default()
            .route("/items", HttpMethod::Get, "List items", noop)
            .route("/items", HttpMethod::Post, "Create item", noop)
            .unlisted(Router::new().route("/old", get(|| async { Redirect::temporary("/items") })))
            .into_parts();

        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0].method, HttpMethod::Get);
        assert_eq!(endpoints[1].method, HttpMethod::Post);
        assert_eq!(endpoints[1].description, "Create item");
        assert!(endpoints.iter().all(|e| e.path == "/items"));
    }
}
