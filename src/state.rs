//! Shared application state.
//!
//! Holds what every request handler reads: the moment the process started
//! and the table of registered endpoints.

use std::sync::Arc;
use std::time::Instant;

use crate::models::Endpoint;

/// The instant the application started.
///
/// Captured once at startup and only read afterwards. Uptime is measured on
/// the monotonic clock, so it never goes backwards when the wall clock moves.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    instant: Instant,
}

impl StartTime {
    /// Record the current moment as the start time.
    pub fn now() -> Self {
        StartTime {
            instant: Instant::now(),
        }
    }

    /// Whole seconds elapsed since the start time.
    pub fn uptime_seconds(&self) -> u64 {
        self.instant.elapsed().as_secs()
    }
}

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the fields are cheap shared handles.
#[derive(Clone)]
pub struct AppState {
    pub started: StartTime,
    /// Every registered path and method, in registration order.
    pub endpoints: Arc<[Endpoint]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_starts_at_zero_and_never_decreases() {
        let started = StartTime::now();
        let first = started.uptime_seconds();
        let second = started.uptime_seconds();
        assert_eq!(first, 0);
        assert!(second >= first);
    }
}
