//! Activation context resolution.
//!
//! A reporter needs three identifying strings from the hosting environment:
//! the application name, the service manifest name, and the node name. The
//! orchestration platform supplies these through its activation context; this
//! module abstracts that lookup behind the [`ActivationContext`] trait so the
//! reporter has no hidden global dependency and can be constructed against a
//! fake context in tests.
//!
//! Resolution happens exactly once, at reporter construction. Any failure is
//! a construction failure surfaced unchanged to the caller.

use std::env;
use std::env::VarError;

/// Environment variable holding the application name.
pub const APPLICATION_NAME_VAR: &str = "CLUSTER_APPLICATION_NAME";
/// Environment variable holding the service manifest name.
pub const SERVICE_MANIFEST_NAME_VAR: &str = "CLUSTER_SERVICE_MANIFEST_NAME";
/// Environment variable holding the node name.
pub const NODE_NAME_VAR: &str = "CLUSTER_NODE_NAME";

/// Failure to resolve deployment identity from the hosting environment.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("activation context variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("activation context unavailable: {0}")]
    Unavailable(String),
}

/// Source of the deployment identity strings.
///
/// Implementations resolve the current deployment's application name, service
/// manifest name, and node name from wherever the hosting platform exposes
/// them.
pub trait ActivationContext {
    /// URI-shaped name of the application the current package belongs to.
    fn application_name(&self) -> Result<String, ContextError>;

    /// Name of the service manifest that produced the current package.
    fn service_manifest_name(&self) -> Result<String, ContextError>;

    /// Name of the cluster node the current package runs on.
    fn node_name(&self) -> Result<String, ContextError>;
}

/// Activation context backed by process environment variables.
///
/// Orchestration platforms commonly inject deployment identity into the
/// container environment; this implementation reads it from
/// [`APPLICATION_NAME_VAR`], [`SERVICE_MANIFEST_NAME_VAR`] and
/// [`NODE_NAME_VAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvActivationContext;

impl EnvActivationContext {
    pub fn new() -> Self {
        Self
    }

    fn resolve(var: &'static str) -> Result<String, ContextError> {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) | Err(VarError::NotPresent) => Err(ContextError::MissingVariable(var)),
            Err(e @ VarError::NotUnicode(_)) => Err(ContextError::Unavailable(e.to_string())),
        }
    }
}

impl ActivationContext for EnvActivationContext {
    fn application_name(&self) -> Result<String, ContextError> {
        Self::resolve(APPLICATION_NAME_VAR)
    }

    fn service_manifest_name(&self) -> Result<String, ContextError> {
        Self::resolve(SERVICE_MANIFEST_NAME_VAR)
    }

    fn node_name(&self) -> Result<String, ContextError> {
        Self::resolve(NODE_NAME_VAR)
    }
}

/// Activation context with fixed values.
///
/// Useful when the host passes deployment identity through configuration
/// rather than the environment, and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticActivationContext {
    pub application_name: String,
    pub service_manifest_name: String,
    pub node_name: String,
}

impl StaticActivationContext {
    pub fn new(
        application_name: impl Into<String>,
        service_manifest_name: impl Into<String>,
        node_name: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            service_manifest_name: service_manifest_name.into(),
            node_name: node_name.into(),
        }
    }
}

impl ActivationContext for StaticActivationContext {
    fn application_name(&self) -> Result<String, ContextError> {
        Ok(self.application_name.clone())
    }

    fn service_manifest_name(&self) -> Result<String, ContextError> {
        Ok(self.service_manifest_name.clone())
    }

    fn node_name(&self) -> Result<String, ContextError> {
        Ok(self.node_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_context_resolves() {
        let ctx = StaticActivationContext::new("fabric:/MyApp", "MyServicePkg", "node-0");
        assert_eq!(ctx.application_name().unwrap(), "fabric:/MyApp");
        assert_eq!(ctx.service_manifest_name().unwrap(), "MyServicePkg");
        assert_eq!(ctx.node_name().unwrap(), "node-0");
    }

    #[test]
    fn test_env_context_missing_variable() {
        // CLUSTER_* variables are not set in the test environment.
        let ctx = EnvActivationContext::new();
        let err = ctx.node_name().unwrap_err();
        match err {
            ContextError::MissingVariable(var) => assert_eq!(var, NODE_NAME_VAR),
            other => panic!("expected MissingVariable, got {other:?}"),
        }
    }
}
