//! Snapshots assembled by `GET /`.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::debug;

use super::Endpoint;
use crate::state::StartTime;

/// Label reported as the serving framework.
pub const FRAMEWORK: &str = "axum";

/// Name, version and description of this service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub framework: String,
}

impl ServiceInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        ServiceInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            framework: FRAMEWORK.to_string(),
        }
    }
}

/// Facts about the host the process runs on.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

impl SystemInfo {
    /// Read the host facts from the operating system.
    pub fn collect() -> Self {
        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            platform_version: System::long_os_version()
                .or_else(System::os_version)
                .unwrap_or_else(|| "unknown".to_string()),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_count: logical_cpu_count(),
            rust_version: env!("RUSTC_VERSION").to_string(),
        }
    }
}

/// Logical CPUs of the host, never less than one.
fn logical_cpu_count() -> usize {
    let system =
        System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    system.cpus().len().max(1)
}

/// Uptime and clock readings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: DateTime<Utc>,
    /// Local timezone name, e.g. `Europe/Berlin`.
    pub timezone: String,
}

impl RuntimeInfo {
    pub fn since(started: &StartTime) -> Self {
        let uptime_seconds = started.uptime_seconds();
        RuntimeInfo {
            uptime_seconds,
            uptime_human: format_uptime(uptime_seconds),
            current_time: Utc::now(),
            timezone: timezone_label(iana_time_zone::get_timezone(), *Local::now().offset()),
        }
    }
}

/// Name of the local timezone.
///
/// Falls back to `UTC` or the bare offset when the system does not expose a
/// zone name.
fn timezone_label<E>(lookup: Result<String, E>, offset: FixedOffset) -> String {
    match lookup {
        Ok(name) if !name.is_empty() => name,
        _ if offset.local_minus_utc() == 0 => "UTC".to_string(),
        _ => offset.to_string(),
    }
}

/// Render seconds as `"{hours}h {minutes}m"`. Hours are not wrapped into days.
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Facts about the request being served.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: Option<String>,
    pub method: String,
    pub path: String,
}

/// Extractor: reads the peer address, `User-Agent`, method and path.
///
/// The peer address is only known when the server was started with connect
/// info; otherwise the client IP is reported as `"unknown"`.
#[async_trait]
impl<S> FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let client_ip = match parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            Some(ConnectInfo(addr)) => addr.ip().to_string(),
            None => {
                debug!("Connection info missing, client IP unknown");
                "unknown".to_string()
            }
        };

        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(RequestInfo {
            client_ip,
            user_agent,
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
        })
    }
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiInfoResponse {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: Vec<Endpoint>,
}
