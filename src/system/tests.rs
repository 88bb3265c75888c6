use super::{format_uptime, HealthStatus, SystemService};

use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate};

use crate::dataset::{DatasetCache, DatasetConfig, Snapshot};
use crate::models::TransactionRecord;

#[test]
fn test_uptime_is_formatted_in_hours_and_minutes() {
    assert_eq!(format_uptime(Duration::from_secs(0)), "0h 0min");
    assert_eq!(format_uptime(Duration::from_secs(59)), "0h 0min");
    assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 25 * 60 + 7)), "3h 25min");
    assert_eq!(format_uptime(Duration::from_secs(49 * 3600)), "49h 0min");
}

#[tokio::test]
async fn test_health_is_degraded_until_the_dataset_is_loaded() -> Result<()> {
    let service = SystemService::new();
    let cache = DatasetCache::from_config(&DatasetConfig::new(Some("does/not/exist.csv".into()), None));

    assert!(cache.load().await.is_err());

    let health = service.health(&cache).await;
    assert_eq!(health.status, HealthStatus::Degraded);
    assert!(!health.dataset_loaded);
    assert_eq!(health.dataset_size, 0);

    let timestamp = NaiveDate::from_ymd_opt(2010, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("Invalid fixture timestamp"))?;
    cache.install(Snapshot::new(vec![
        TransactionRecord::new("1", timestamp, 1, 1.0, "Chip Transaction"),
        TransactionRecord::new("2", timestamp, 1, 1.0, "Chip Transaction"),
    ])).await;

    let health = service.health(&cache).await;
    assert_eq!(health.status, HealthStatus::Ok);
    assert!(health.dataset_loaded);
    assert_eq!(health.dataset_size, 2);

    let json = serde_json::to_value(&health)?;
    assert_eq!(json["status"], "ok");

    Ok(())
}

#[test]
fn test_metadata_reports_version_and_utc_timestamp() -> Result<()> {
    let metadata = SystemService::default().metadata();

    assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
    assert!(!metadata.dataset_source.is_empty());
    DateTime::parse_from_rfc3339(&metadata.last_update)?;

    Ok(())
}
