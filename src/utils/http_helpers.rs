use std::any::Any;

use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body of every error response: `{"detail": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
#[derive(Debug)]
pub struct HTTPError {
    status: StatusCode,
    detail: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and detail message.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        HTTPError {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        HTTPError::new(StatusCode::NOT_FOUND, "Not found")
    }

    pub fn method_not_allowed() -> Self {
        HTTPError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// 500 carrying the message of whatever went wrong.
    pub fn internal(message: impl std::fmt::Display) -> Self {
        HTTPError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", message),
        )
    }
}

/// Converts our `HTTPError` into a JSON response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Router fallback for paths that match no route.
pub async fn not_found() -> HTTPError {
    HTTPError::not_found()
}

/// Gives the empty 405 responses of method routing a JSON body.
///
/// The `Allow` header set by the router is kept.
pub async fn rewrite_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut rewritten = HTTPError::method_not_allowed().into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}

/// Turns a handler panic into a 500 response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %message, "Unhandled error while serving request");
    HTTPError::internal(message).into_response()
}
