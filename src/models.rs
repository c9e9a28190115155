pub mod endpoint;
pub mod health;
pub mod info;

pub use endpoint::{Endpoint, HttpMethod};
pub use health::{HealthCheckResponse, HealthStatus};
pub use info::{ApiInfoResponse, RequestInfo, RuntimeInfo, ServiceInfo, SystemInfo};
