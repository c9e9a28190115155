mod common;

use axum::http::{Method, StatusCode};
use common::{build_app, build_request, json_body, request_with_user_agent, CLIENT_IP};
use tower::ServiceExt;

const METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"];

#[tokio::test]
async fn root_returns_all_sections() {
    let app = build_app();

    let response = app
        .oneshot(build_request("/", Method::GET))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    for field in ["service", "system", "runtime", "request", "endpoints"] {
        assert!(body.get(field).is_some(), "missing field: {}", field);
    }
}

#[tokio::test]
async fn root_describes_service_and_host() {
    let app = build_app();

    let body = json_body(
        app.oneshot(build_request("/", Method::GET))
            .await
            .expect("request should succeed"),
    )
    .await;

    let service = &body["service"];
    assert_eq!(service["name"], "devops-info-service");
    assert_eq!(service["version"], "1.0.0");
    assert_eq!(service["framework"], "axum");
    assert!(service["description"].is_string());

    let system = &body["system"];
    for field in [
        "hostname",
        "platform",
        "platform_version",
        "architecture",
        "cpu_count",
        "rust_version",
    ] {
        assert!(system.get(field).is_some(), "missing system field: {}", field);
    }
    assert!(system["hostname"].is_string());
    assert!(system["cpu_count"].as_u64().unwrap() > 0);

    let runtime = &body["runtime"];
    assert!(runtime["uptime_seconds"].is_u64());
    assert_eq!(runtime["uptime_human"], "0h 0m");
    assert!(runtime["current_time"].is_string());
    assert!(runtime["timezone"].is_string());
}

#[tokio::test]
async fn root_reflects_the_request() {
    let app = build_app();

    let body = json_body(
        app.oneshot(build_request("/", Method::GET))
            .await
            .expect("request should succeed"),
    )
    .await;

    let request = &body["request"];
    assert_eq!(request["method"], "GET");
    assert_eq!(request["path"], "/");
    assert_eq!(request["client_ip"], CLIENT_IP.to_string());
    assert!(request["user_agent"].is_null());
}

#[tokio::test]
async fn custom_user_agent_is_echoed() {
    let app = build_app();

    let body = json_body(
        app.oneshot(request_with_user_agent("/", "TestBot/1.0"))
            .await
            .expect("request should succeed"),
    )
    .await;

    assert_eq!(body["request"]["user_agent"], "TestBot/1.0");
}

#[tokio::test]
async fn endpoints_list_registered_routes() {
    let app = build_app();

    let body = json_body(
        app.oneshot(build_request("/", Method::GET))
            .await
            .expect("request should succeed"),
    )
    .await;

    let endpoints = body["endpoints"].as_array().expect("endpoints is a list");
    assert!(!endpoints.is_empty());
    for endpoint in endpoints {
        assert!(endpoint["path"].is_string());
        assert!(endpoint["description"].is_string());
        let method = endpoint["method"].as_str().unwrap();
        assert!(METHODS.contains(&method), "unexpected method {}", method);
    }

    let listed: Vec<(&str, &str)> = endpoints
        .iter()
        .map(|e| (e["path"].as_str().unwrap(), e["method"].as_str().unwrap()))
        .collect();
    assert_eq!(listed, vec![("/", "GET"), ("/health/", "GET")]);
}
