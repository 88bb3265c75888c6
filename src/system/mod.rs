mod health;
#[cfg(test)]
mod tests;

pub use health::{format_uptime, HealthCheck, HealthStatus, SystemMetadata, SystemService, DATASET_SOURCE};
