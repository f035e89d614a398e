//! Health client seam and settings.
//!
//! The platform's health-management client is consumed as an opaque external
//! service. This module defines the [`HealthClient`] trait the reporter
//! submits through, the [`ClientSettings`] used to open a handle, and the
//! discriminated [`ClientError`] the submission call reports failures with.

use crate::report::DeployedPackageHealthReport;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for opening a health client handle.
///
/// The send interval is a batching knob owned by the platform: submitted
/// reports are buffered client-side and flushed on this cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Health-report send interval in seconds (default: 5)
    #[serde(default = "default_send_interval_secs")]
    pub send_interval_secs: u64,
}

fn default_send_interval_secs() -> u64 {
    5
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            send_interval_secs: default_send_interval_secs(),
        }
    }
}

impl ClientSettings {
    /// Send interval as a [`Duration`].
    pub fn send_interval(&self) -> Duration {
        Duration::from_secs(self.send_interval_secs)
    }
}

/// Failure reported by the health client.
///
/// `StaleReport` is the one locally-recoverable kind: the subsystem already
/// accepted a newer report for the same entity and property. Everything else
/// is passed through to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("a newer health report for the same entity and property was already accepted")]
    StaleReport,

    #[error("health subsystem rejected the report: {0}")]
    Rejected(String),

    #[error("health subsystem unreachable: {0}")]
    Connection(String),
}

impl ClientError {
    /// Whether this failure means the report was merely superseded and can
    /// be ignored.
    pub fn is_stale_report(&self) -> bool {
        matches!(self, ClientError::StaleReport)
    }
}

/// Handle to the orchestration platform's health subsystem.
///
/// `report_health` is synchronous and may block on I/O for the duration of
/// the underlying call; callers on cooperative schedulers should dispatch to
/// a background worker. Implementations must be safe to share for reads:
/// the reporter calls `report_health` through `&self` from any thread.
pub trait HealthClient {
    /// Opens a handle configured with the given settings.
    fn connect(settings: &ClientSettings) -> Result<Self, ClientError>
    where
        Self: Sized;

    /// Submits one report. Exactly one submission attempt per call; the
    /// platform batches and flushes according to the configured interval.
    fn report_health(&self, report: &DeployedPackageHealthReport) -> Result<(), ClientError>;

    /// Releases resources held by the handle. Must be idempotent and must
    /// not fail.
    fn close(&mut self) {}
}

/// Client that discards every report.
///
/// For local development and examples, where no health subsystem is
/// available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClient;

impl HealthClient for NoopClient {
    fn connect(_settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self)
    }

    fn report_health(&self, _report: &DeployedPackageHealthReport) -> Result<(), ClientError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = ClientSettings::default();
        assert_eq!(settings.send_interval_secs, 5);
        assert_eq!(settings.send_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_settings_deserialize_empty() {
        let settings: ClientSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.send_interval_secs, 5);
    }

    #[test]
    fn test_settings_deserialize_override() {
        let settings: ClientSettings = serde_json::from_str(r#"{"send_interval_secs": 30}"#).unwrap();
        assert_eq!(settings.send_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_is_stale_report() {
        assert!(ClientError::StaleReport.is_stale_report());
        assert!(!ClientError::Rejected("bad entity".to_string()).is_stale_report());
        assert!(!ClientError::Connection("timed out".to_string()).is_stale_report());
    }
}
