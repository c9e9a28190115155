use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status reported by the health check. The only value is `"healthy"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Body of `GET /health/`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}

impl HealthCheckResponse {
    pub fn healthy(uptime_seconds: u64) -> Self {
        HealthCheckResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            uptime_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_healthy() {
        let json = serde_json::to_value(HealthCheckResponse::healthy(42)).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptime_seconds"], 42);
    }

    #[test]
    fn other_statuses_are_rejected() {
        let parsed = serde_json::from_str::<HealthStatus>("\"degraded\"");
        assert!(parsed.is_err());
    }
}
