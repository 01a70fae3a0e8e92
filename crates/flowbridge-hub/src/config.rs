//! Ingestion endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PublishError, PublishResult};

/// Hub name used when `EVENT_HUB_NAME` is unset.
pub const DEFAULT_HUB_NAME: &str = "nsgflowhub";

/// Configuration for the stream-ingestion endpoint.
///
/// The publisher reads this from the environment once per call:
///
/// - `EVENT_HUB_NAMESPACE` (required): namespace hosting the endpoint,
///   either a bare name or a full connection URL.
/// - `EVENT_HUB_NAME` (optional, default `nsgflowhub`): stream messages
///   are published to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Namespace hosting the ingestion endpoint.
    pub namespace: String,
    /// Stream (hub) name messages are published to.
    pub hub_name: String,
}

impl HubConfig {
    /// Creates a configuration with the default hub name.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            hub_name: DEFAULT_HUB_NAME.to_owned(),
        }
    }

    /// Sets the hub name.
    #[must_use]
    pub fn with_hub_name(mut self, hub_name: impl Into<String>) -> Self {
        self.hub_name = hub_name.into();
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> PublishResult<Self> {
        Self::from_vars(
            std::env::var("EVENT_HUB_NAMESPACE").ok(),
            std::env::var("EVENT_HUB_NAME").ok(),
        )
    }

    /// Resolves the configuration from already-looked-up variables.
    fn from_vars(namespace: Option<String>, hub_name: Option<String>) -> PublishResult<Self> {
        let namespace = namespace
            .filter(|namespace| !namespace.is_empty())
            .ok_or_else(|| {
                PublishError::config("EVENT_HUB_NAMESPACE environment variable not set")
            })?;

        let hub_name = hub_name
            .filter(|hub_name| !hub_name.is_empty())
            .unwrap_or_else(|| DEFAULT_HUB_NAME.to_owned());

        Ok(Self {
            namespace,
            hub_name,
        })
    }

    /// Returns the connection URL for the namespace.
    ///
    /// A bare namespace resolves to `nats://{namespace}:4222`; a value that
    /// already carries a scheme is used as-is.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        if self.namespace.contains("://") {
            self.namespace.clone()
        } else {
            format!("nats://{}:4222", self.namespace)
        }
    }

    /// Returns the subject messages are published to.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("{}.ingest", self.hub_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_namespace_is_a_config_error() {
        let result = HubConfig::from_vars(None, None);
        assert!(matches!(result, Err(PublishError::Config(_))));

        let result = HubConfig::from_vars(Some(String::new()), None);
        assert!(matches!(result, Err(PublishError::Config(_))));
    }

    #[test]
    fn hub_name_defaults_to_nsgflowhub() {
        let config = HubConfig::from_vars(Some("flowhub-ns".to_owned()), None).unwrap();
        assert_eq!(config.hub_name, "nsgflowhub");
    }

    #[test]
    fn explicit_hub_name_wins() {
        let config = HubConfig::from_vars(
            Some("flowhub-ns".to_owned()),
            Some("vnetflows".to_owned()),
        )
        .unwrap();
        assert_eq!(config.hub_name, "vnetflows");
    }

    #[test]
    fn bare_namespace_resolves_to_nats_url() {
        let config = HubConfig::new("flowhub-ns");
        assert_eq!(config.endpoint_url(), "nats://flowhub-ns:4222");
    }

    #[test]
    fn namespace_with_scheme_is_used_verbatim() {
        let config = HubConfig::new("tls://ingest.internal:4443");
        assert_eq!(config.endpoint_url(), "tls://ingest.internal:4443");
    }

    #[test]
    fn subject_is_scoped_to_hub_name() {
        let config = HubConfig::new("flowhub-ns").with_hub_name("vnetflows");
        assert_eq!(config.subject(), "vnetflows.ingest");
    }
}
