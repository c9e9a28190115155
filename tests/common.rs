#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, Response};
use axum::Router;
use devops_info_service::routes::create_router;
use devops_info_service::state::StartTime;
use serde_json::Value;

pub const CLIENT_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 20);

pub fn build_app() -> Router {
    create_router(StartTime::now())
}

/// A request as the server sees it, peer address included.
pub fn build_request(path: &str, method: Method) -> Request<Body> {
    request_builder(path, method, None)
}

pub fn request_with_user_agent(path: &str, user_agent: &str) -> Request<Body> {
    request_builder(path, Method::GET, Some(user_agent))
}

fn request_builder(path: &str, method: Method, user_agent: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user_agent) = user_agent {
        builder = builder.header("User-Agent", user_agent);
    }
    let mut request = builder
        .body(Body::empty())
        .expect("failed to build request");

    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::new(IpAddr::V4(CLIENT_IP), 53210)));

    request
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
