use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::dataset::{DatasetCache, DatasetSource};

pub const DATASET_SOURCE: &str = "Kaggle - Transactions Fraud Datasets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheck {
    pub status: HealthStatus,
    pub uptime: String,
    pub dataset_loaded: bool,
    pub dataset_size: usize
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemMetadata {
    pub version: String,
    /// RFC 3339 UTC time the metadata was produced.
    pub last_update: String,
    pub dataset_source: String
}

/// Reports process health and dataset readiness.
#[derive(Debug, Clone)]
pub struct SystemService {
    started: Instant
}

impl SystemService {
    pub fn new() -> Self {
        Self {
            started: Instant::now()
        }
    }

    /// Health is `Ok` when the dataset is loaded and `Degraded` otherwise; never an error.
    pub async fn health<S: DatasetSource>(&self, cache: &DatasetCache<S>) -> HealthCheck {
        let dataset_size = if cache.is_loaded() {
            cache.get().await.ok().map(|snapshot| snapshot.len())
        } else {
            None
        };

        HealthCheck {
            status: if dataset_size.is_some() { HealthStatus::Ok } else { HealthStatus::Degraded },
            uptime: format_uptime(self.started.elapsed()),
            dataset_loaded: dataset_size.is_some(),
            dataset_size: dataset_size.unwrap_or(0)
        }
    }

    pub fn metadata(&self) -> SystemMetadata {
        SystemMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            last_update: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            dataset_source: DATASET_SOURCE.to_string()
        }
    }
}

impl Default for SystemService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an uptime as `"<hours>h <minutes>min"`.
pub fn format_uptime(uptime: Duration) -> String {
    let seconds = uptime.as_secs();
    format!("{}h {}min", seconds / 3600, (seconds % 3600) / 60)
}
