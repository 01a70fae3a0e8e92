//! Single-message publishing over transient producer connections.

use std::sync::Arc;
use std::time::Duration;

use async_nats::{Client, ConnectOptions, jetstream};
use bytes::Bytes;
use flowbridge_core::{Credential, CredentialProvider, CredentialScope};
use tokio::time::timeout;

use crate::config::HubConfig;
use crate::error::{PublishError, PublishResult};
use crate::TRACING_TARGET;

/// Timeout applied to establishing the transient producer connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Capability that publishes one payload to the stream-ingestion endpoint.
#[async_trait::async_trait]
pub trait HubPublisher: Send + Sync {
    /// Publishes the content as exactly one message.
    async fn publish(&self, content: &str) -> PublishResult<()>;
}

/// Publishes to a JetStream ingestion endpoint.
///
/// Endpoint configuration is read from the environment on every call and
/// the producer connection lives strictly around the single send; nothing
/// is pooled or reused across invocations.
#[derive(Clone)]
pub struct NatsHubPublisher {
    credentials: Arc<dyn CredentialProvider>,
}

impl NatsHubPublisher {
    /// Creates a publisher that authenticates through the given provider.
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }

    /// Builds connect options carrying the credential.
    fn connect_options(credential: &Credential) -> ConnectOptions {
        let options = ConnectOptions::new()
            .name("flowbridge-relay")
            .connection_timeout(CONNECT_TIMEOUT);

        match credential {
            Credential::Token { token } => options.token(token.clone()),
            Credential::UserPassword { user, pass } => {
                options.user_and_password(user.clone(), pass.clone())
            }
            Credential::Anonymous => options,
            other => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    credential = ?std::mem::discriminant(other),
                    "Credential shape not applicable to stream ingestion, connecting anonymously"
                );
                options
            }
        }
    }

    /// Opens the transient producer connection for this call.
    async fn connect(&self, config: &HubConfig) -> PublishResult<Client> {
        let credential = self.credentials.credential(CredentialScope::Ingest).await?;
        let url = config.endpoint_url();

        timeout(
            CONNECT_TIMEOUT,
            async_nats::connect_with_options(&url, Self::connect_options(&credential)),
        )
        .await
        .map_err(|_| {
            PublishError::connection(format!(
                "connect to {url} timed out after {CONNECT_TIMEOUT:?}"
            ))
        })?
        .map_err(|err| Self::classify_connect_error(&err.to_string()))
    }

    /// Splits connect failures into authorization rejections and the rest.
    ///
    /// The server reports credential rejections as "Authorization Violation"
    /// in the error text.
    fn classify_connect_error(message: &str) -> PublishError {
        if message.to_ascii_lowercase().contains("authorization") {
            PublishError::unauthorized(message)
        } else {
            PublishError::connection(message)
        }
    }
}

#[async_trait::async_trait]
impl HubPublisher for NatsHubPublisher {
    async fn publish(&self, content: &str) -> PublishResult<()> {
        let config = HubConfig::from_env()?;
        let client = self.connect(&config).await?;
        let jetstream = jetstream::new(client.clone());

        // A missing stream is a configuration fault, not a delivery fault.
        jetstream
            .get_stream(&config.hub_name)
            .await
            .map_err(|err| PublishError::stream_missing(&config.hub_name, err.to_string()))?;

        let subject = config.subject();
        let payload = Bytes::copy_from_slice(content.as_bytes());

        jetstream
            .publish(subject.clone(), payload)
            .await
            .map_err(|err| PublishError::delivery(&subject, err.to_string()))?
            .await
            .map_err(|err| PublishError::delivery(&subject, err.to_string()))?;

        client
            .flush()
            .await
            .map_err(|err| PublishError::connection(err.to_string()))?;

        tracing::info!(
            target: TRACING_TARGET,
            hub = %config.hub_name,
            subject = %subject,
            size = content.len(),
            "Published flow log payload"
        );

        // Dropping the client releases the producer connection.
        Ok(())
    }
}

impl std::fmt::Debug for NatsHubPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsHubPublisher").finish_non_exhaustive()
    }
}
