//! Shared service state.

use std::sync::Arc;

use flowbridge_blob::{AzureBlobFetcher, BlobFetcher};
use flowbridge_core::{CredentialProvider, EnvCredentials};
use flowbridge_hub::{HubPublisher, NatsHubPublisher};

/// Capabilities shared by all handlers.
///
/// Holds only immutable `Arc`ed collaborators; every fetch and publish call
/// creates and drops its own transient client inside the collaborator, so
/// nothing here is mutated across requests.
#[derive(Clone)]
pub struct ServiceState {
    fetcher: Arc<dyn BlobFetcher>,
    publisher: Arc<dyn HubPublisher>,
}

impl ServiceState {
    /// Creates a state from explicit collaborators.
    pub fn new(fetcher: Arc<dyn BlobFetcher>, publisher: Arc<dyn HubPublisher>) -> Self {
        Self { fetcher, publisher }
    }

    /// Production wiring: environment-resolved credentials injected into
    /// the blob fetcher and the stream publisher.
    #[must_use]
    pub fn from_env() -> Self {
        let credentials: Arc<dyn CredentialProvider> = Arc::new(EnvCredentials::new());

        Self::new(
            Arc::new(AzureBlobFetcher::new(credentials.clone())),
            Arc::new(NatsHubPublisher::new(credentials)),
        )
    }

    /// Returns the blob fetcher.
    pub fn fetcher(&self) -> &dyn BlobFetcher {
        self.fetcher.as_ref()
    }

    /// Returns the stream publisher.
    pub fn publisher(&self) -> &dyn HubPublisher {
        self.publisher.as_ref()
    }
}

impl std::fmt::Debug for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceState").finish_non_exhaustive()
    }
}
