//! Health status — the liveness report.

use serde::Serialize;

use crate::time::{self, Timestamp};

/// Value of `status` whenever the process is able to answer at all.
pub const HEALTHY: &str = "healthy";

/// Liveness report, built fresh for every health check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(serialize_with = "time::serialize")]
    pub timestamp: Timestamp,
}

impl HealthStatus {
    /// A healthy report stamped with the current UTC time.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY,
            timestamp: time::now(),
        }
    }
}
