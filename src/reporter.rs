//! Health reporter for a logical entity hosted on the cluster.
//!
//! [`ClusterHealthReporter`] captures the deployment identity once at
//! construction and then forwards healthy/warning/problem reports through
//! the platform's health client. All three operations funnel into one
//! submission routine; there is no local retry, buffering, or ordering
//! guarantee beyond what the platform provides.
//!
//! # Usage
//!
//! ```rust
//! use cluster_health_reporter::{
//!     ClientSettings, ClusterHealthReporter, HealthReporter, NoopClient,
//!     StaticActivationContext,
//! };
//!
//! let context = StaticActivationContext::new("fabric:/MyApp", "MyServicePkg", "node-0");
//! let mut reporter = ClusterHealthReporter::<NoopClient>::new(
//!     "MyPipeline",
//!     &context,
//!     &ClientSettings::default(),
//! )
//! .unwrap();
//!
//! reporter.report_healthy(None, None).unwrap();
//! reporter.report_problem("disk full", None).unwrap();
//! reporter.close();
//! ```

use crate::client::{ClientError, ClientSettings, HealthClient};
use crate::context::{ActivationContext, ContextError};
use crate::report::{
    DeployedPackageHealthReport, HealthInformation, HealthLevel, DEFAULT_HEALTHY_DESCRIPTION,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Failure surfaced by reporter construction or a report operation.
#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    #[error("entity identifier must not be empty or whitespace-only")]
    InvalidIdentifier,

    #[error("failed to resolve activation context: {0}")]
    Context(#[from] ContextError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Health reporting surface for a logical entity.
///
/// The `context` argument is accepted for interface symmetry and is not
/// forwarded in the submitted report.
pub trait HealthReporter {
    /// Reports the entity as healthy. With no description, submits
    /// [`DEFAULT_HEALTHY_DESCRIPTION`].
    fn report_healthy(
        &self,
        description: Option<&str>,
        context: Option<&str>,
    ) -> Result<(), ReporterError>;

    /// Reports a degraded but operational condition.
    fn report_warning(&self, description: &str, context: Option<&str>)
        -> Result<(), ReporterError>;

    /// Reports a non-operational condition.
    fn report_problem(&self, description: &str, context: Option<&str>)
        -> Result<(), ReporterError>;
}

/// Reports health for one logical entity through the platform's client.
///
/// The entity identifier and the three deployment-context strings are fixed
/// at construction and never change. All fields are read-only afterward, so
/// a reporter may be shared across threads issuing report calls; the only
/// mutable state is the closed flag.
pub struct ClusterHealthReporter<C: HealthClient> {
    client: C,
    entity_identifier: String,
    application_name: String,
    service_manifest_name: String,
    node_name: String,
    closed: AtomicBool,
}

impl<C: HealthClient> ClusterHealthReporter<C> {
    /// Opens a client handle and builds a reporter for `entity_identifier`.
    ///
    /// The identifier is validated before anything else runs: an empty or
    /// whitespace-only identifier fails with
    /// [`ReporterError::InvalidIdentifier`] and no client handle is opened.
    /// Client connect and context resolution failures propagate unchanged.
    pub fn new(
        entity_identifier: impl Into<String>,
        context: &dyn ActivationContext,
        settings: &ClientSettings,
    ) -> Result<Self, ReporterError> {
        let entity_identifier = validate_identifier(entity_identifier)?;
        let client = C::connect(settings)?;
        Self::build(entity_identifier, context, client)
    }

    /// Builds a reporter around an already-open client handle.
    ///
    /// Same contract as [`new`](Self::new), with the connect step owned by
    /// the caller.
    pub fn with_client(
        entity_identifier: impl Into<String>,
        context: &dyn ActivationContext,
        client: C,
    ) -> Result<Self, ReporterError> {
        let entity_identifier = validate_identifier(entity_identifier)?;
        Self::build(entity_identifier, context, client)
    }

    fn build(
        entity_identifier: String,
        context: &dyn ActivationContext,
        client: C,
    ) -> Result<Self, ReporterError> {
        let application_name = context.application_name()?;
        let service_manifest_name = context.service_manifest_name()?;
        let node_name = context.node_name()?;

        info!(
            entity = %entity_identifier,
            application = %application_name,
            node = %node_name,
            "health reporter ready"
        );

        Ok(Self {
            client,
            entity_identifier,
            application_name,
            service_manifest_name,
            node_name,
            closed: AtomicBool::new(false),
        })
    }

    /// Identifier of the entity this reporter submits for.
    pub fn entity_identifier(&self) -> &str {
        &self.entity_identifier
    }

    /// Application name resolved at construction.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Service manifest name resolved at construction.
    pub fn service_manifest_name(&self) -> &str {
        &self.service_manifest_name
    }

    /// Node name resolved at construction.
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Releases the client handle. Idempotent and never fails; report calls
    /// issued after close are silent no-ops.
    pub fn close(&mut self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!(entity = %self.entity_identifier, "closing health reporter");
            self.client.close();
        }
    }

    fn submit(&self, level: HealthLevel, description: &str) -> Result<(), ReporterError> {
        if self.is_closed() {
            return Ok(());
        }

        let report = DeployedPackageHealthReport {
            application_name: self.application_name.clone(),
            service_manifest_name: self.service_manifest_name.clone(),
            node_name: self.node_name.clone(),
            information: HealthInformation::connectivity(
                self.entity_identifier.clone(),
                level,
                description,
            ),
        };

        debug!(entity = %self.entity_identifier, %level, "submitting health report");

        match self.client.report_health(&report) {
            Ok(()) => Ok(()),
            // Reports are scoped to the deployed package, not the individual
            // instance or replica. When several replicas of the same service
            // share a node they race on the same (entity, property) pair and
            // the loser's report comes back stale; that outcome carries no
            // information, so it is swallowed.
            Err(ClientError::StaleReport) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<C: HealthClient> HealthReporter for ClusterHealthReporter<C> {
    fn report_healthy(
        &self,
        description: Option<&str>,
        _context: Option<&str>,
    ) -> Result<(), ReporterError> {
        self.submit(
            HealthLevel::Ok,
            description.unwrap_or(DEFAULT_HEALTHY_DESCRIPTION),
        )
    }

    fn report_warning(
        &self,
        description: &str,
        _context: Option<&str>,
    ) -> Result<(), ReporterError> {
        self.submit(HealthLevel::Warning, description)
    }

    fn report_problem(
        &self,
        description: &str,
        _context: Option<&str>,
    ) -> Result<(), ReporterError> {
        self.submit(HealthLevel::Error, description)
    }
}

impl<C: HealthClient> Drop for ClusterHealthReporter<C> {
    fn drop(&mut self) {
        self.close();
    }
}

fn validate_identifier(identifier: impl Into<String>) -> Result<String, ReporterError> {
    let identifier = identifier.into();
    if identifier.trim().is_empty() {
        return Err(ReporterError::InvalidIdentifier);
    }
    Ok(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NoopClient;
    use crate::context::StaticActivationContext;

    fn test_context() -> StaticActivationContext {
        StaticActivationContext::new("fabric:/MyApp", "MyServicePkg", "node-0")
    }

    #[test]
    fn test_empty_identifier_rejected() {
        for bad in ["", "   ", "\t\n"] {
            let result =
                ClusterHealthReporter::<NoopClient>::new(bad, &test_context(), &ClientSettings::default());
            assert!(matches!(result, Err(ReporterError::InvalidIdentifier)));
        }
    }

    #[test]
    fn test_identity_fields_captured() {
        let reporter = ClusterHealthReporter::<NoopClient>::new(
            "MyPipeline",
            &test_context(),
            &ClientSettings::default(),
        )
        .expect("construction should succeed");

        assert_eq!(reporter.entity_identifier(), "MyPipeline");
        assert_eq!(reporter.application_name(), "fabric:/MyApp");
        assert_eq!(reporter.service_manifest_name(), "MyServicePkg");
        assert_eq!(reporter.node_name(), "node-0");
        assert!(!reporter.is_closed());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut reporter = ClusterHealthReporter::<NoopClient>::new(
            "MyPipeline",
            &test_context(),
            &ClientSettings::default(),
        )
        .expect("construction should succeed");

        reporter.close();
        reporter.close();
        assert!(reporter.is_closed());
        assert!(reporter.report_healthy(None, None).is_ok());
    }
}
