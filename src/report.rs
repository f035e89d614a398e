//! Health report value types.
//!
//! This module provides the tri-state health level and the report value
//! objects submitted to the platform's health subsystem. A report is an
//! ephemeral record built fresh for every report call; the platform keys it
//! by the (entity, property) pair, so a newer report for the same pair
//! supersedes the previous one.

use serde::Serialize;
use std::fmt;

/// Property name carried by every report submitted through this crate.
///
/// All reports describe the connectivity/liveness of the reporting entity,
/// so the property is fixed rather than caller-chosen.
pub const CONNECTIVITY_PROPERTY: &str = "Connectivity";

/// Default description used by the healthy report operation when the caller
/// supplies none.
pub const DEFAULT_HEALTHY_DESCRIPTION: &str = "Healthy";

/// Severity of a reported condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    /// The entity is operating normally.
    Ok,
    /// The entity is operational but degraded.
    Warning,
    /// The entity is not operational.
    Error,
}

impl HealthLevel {
    /// Returns the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLevel::Ok => "ok",
            HealthLevel::Warning => "warning",
            HealthLevel::Error => "error",
        }
    }
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single health observation for one entity and property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthInformation {
    /// Identifier of the logical entity being reported on (e.g., a named
    /// pipeline or worker). Fixed at reporter construction.
    pub source_id: String,
    /// Property the observation describes; always [`CONNECTIVITY_PROPERTY`]
    /// for reports built by this crate.
    pub property: String,
    /// Severity of the observation.
    pub level: HealthLevel,
    /// Human-readable description of the condition.
    pub description: String,
}

impl HealthInformation {
    /// Builds a connectivity observation for the given entity.
    pub fn connectivity(
        source_id: impl Into<String>,
        level: HealthLevel,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            property: CONNECTIVITY_PROPERTY.to_string(),
            level,
            description: description.into(),
        }
    }
}

/// A health report scoped to a deployed service package.
///
/// The deployed service package is the platform's unit of health reporting:
/// (application, service manifest, node). This is coarser than an individual
/// service instance or replica; see the stale-report handling in
/// [`crate::reporter`] for the consequence of that choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployedPackageHealthReport {
    /// URI-shaped name of the application the package belongs to.
    pub application_name: String,
    /// Name of the service manifest that produced the package.
    pub service_manifest_name: String,
    /// Name of the cluster node the package runs on.
    pub node_name: String,
    /// The observation being reported.
    pub information: HealthInformation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_as_str() {
        assert_eq!(HealthLevel::Ok.as_str(), "ok");
        assert_eq!(HealthLevel::Warning.as_str(), "warning");
        assert_eq!(HealthLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(HealthLevel::Warning.to_string(), "warning");
    }

    #[test]
    fn test_connectivity_builder() {
        let info = HealthInformation::connectivity("MyPipeline", HealthLevel::Ok, "Healthy");
        assert_eq!(info.source_id, "MyPipeline");
        assert_eq!(info.property, CONNECTIVITY_PROPERTY);
        assert_eq!(info.level, HealthLevel::Ok);
        assert_eq!(info.description, "Healthy");
    }

    #[test]
    fn test_report_serialization() {
        let report = DeployedPackageHealthReport {
            application_name: "fabric:/MyApp".to_string(),
            service_manifest_name: "MyServicePkg".to_string(),
            node_name: "node-0".to_string(),
            information: HealthInformation::connectivity(
                "MyPipeline",
                HealthLevel::Error,
                "disk full",
            ),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("fabric:/MyApp"));
        assert!(json.contains("\"level\":\"error\""));
        assert!(json.contains("Connectivity"));
    }
}
