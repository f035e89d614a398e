//! Cluster Health Reporter Library
//!
//! This library reports the health of a logical component (a pipeline, a
//! worker, a service) running inside a cluster orchestration platform. It
//! builds health reports scoped to the deployed service package and forwards
//! them through the platform's health-management client; aggregation,
//! deduplication and expiry of reports remain the platform's job.
//!
//! # Features
//!
//! - **Tri-State Reporting**: healthy, warning, and problem reports that map
//!   to the platform's ok/warning/error levels
//! - **Injected Collaborators**: the activation context and the health client
//!   are trait seams, so the reporter carries no hidden global dependency
//! - **Stale-Report Suppression**: superseded reports from racing replicas on
//!   the same node are treated as success
//! - **Thread-Safe Sharing**: all identity fields are immutable after
//!   construction; report calls go through `&self`
//!
//! # Usage
//!
//! ```rust
//! use cluster_health_reporter::{
//!     ClientSettings, ClusterHealthReporter, HealthReporter, NoopClient,
//!     StaticActivationContext,
//! };
//!
//! // Resolve deployment identity (EnvActivationContext inside a real host).
//! let context = StaticActivationContext::new("fabric:/MyApp", "MyServicePkg", "node-0");
//!
//! // Construct a reporter for the logical entity being monitored.
//! let mut reporter = ClusterHealthReporter::<NoopClient>::new(
//!     "MyPipeline",
//!     &context,
//!     &ClientSettings::default(),
//! )
//! .unwrap();
//!
//! // Report as conditions change.
//! reporter.report_healthy(None, None).unwrap();
//! reporter.report_warning("queue backlog growing", None).unwrap();
//! reporter.report_problem("disk full", None).unwrap();
//!
//! // Release the client handle on shutdown.
//! reporter.close();
//! ```

pub mod client;
pub mod context;
pub mod report;
pub mod reporter;

// Re-export main types for convenience
pub use client::{ClientError, ClientSettings, HealthClient, NoopClient};
pub use context::{ActivationContext, ContextError, EnvActivationContext, StaticActivationContext};
pub use report::{
    DeployedPackageHealthReport, HealthInformation, HealthLevel, CONNECTIVITY_PROPERTY,
    DEFAULT_HEALTHY_DESCRIPTION,
};
pub use reporter::{ClusterHealthReporter, HealthReporter, ReporterError};
