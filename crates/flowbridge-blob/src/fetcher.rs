//! Blob fetching through transient OpenDAL operators.

use std::sync::Arc;

use flowbridge_core::{Credential, CredentialProvider, CredentialScope};
use opendal::{Operator, services};

use crate::blob_url::BlobUrl;
use crate::error::FetchError;
use crate::{FetchResult, TRACING_TARGET};

/// Capability that retrieves a storage object's full content as text.
#[async_trait::async_trait]
pub trait BlobFetcher: Send + Sync {
    /// Fetches the referenced object and decodes it as UTF-8 text.
    async fn fetch(&self, url: &BlobUrl) -> FetchResult<String>;
}

/// Fetches blobs from Azure Blob Storage.
///
/// Every call builds a fresh operator scoped to the account and container
/// named by the URL and drops it when the call returns; nothing is pooled
/// or reused across invocations.
#[derive(Clone)]
pub struct AzureBlobFetcher {
    credentials: Arc<dyn CredentialProvider>,
}

impl AzureBlobFetcher {
    /// Creates a fetcher that authenticates through the given provider.
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }

    /// Builds a transient operator for the account and container of the URL.
    fn operator(url: &BlobUrl, credential: &Credential) -> FetchResult<Operator> {
        let mut builder = services::Azblob::default()
            .endpoint(&url.endpoint())
            .container(url.container())
            .account_name(url.account());

        match credential {
            Credential::AccountKey { key } => {
                builder = builder.account_key(key);
            }
            Credential::SasToken { token } => {
                builder = builder.sas_token(token);
            }
            Credential::Anonymous => {}
            other => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    account = %url.account(),
                    credential = ?std::mem::discriminant(other),
                    "Credential shape not applicable to blob storage, using anonymous access"
                );
            }
        }

        Ok(Operator::new(builder)?.finish())
    }
}

#[async_trait::async_trait]
impl BlobFetcher for AzureBlobFetcher {
    async fn fetch(&self, url: &BlobUrl) -> FetchResult<String> {
        let credential = self.credentials.credential(CredentialScope::Storage).await?;
        let operator = Self::operator(url, &credential)?;

        tracing::debug!(
            target: TRACING_TARGET,
            account = %url.account(),
            container = %url.container(),
            path = %url.path(),
            "Fetching blob"
        );

        let data = operator.read(url.path()).await?.to_vec();

        tracing::info!(
            target: TRACING_TARGET,
            path = %url.path(),
            size = data.len(),
            "Blob fetch complete"
        );

        String::from_utf8(data).map_err(|_| FetchError::invalid_encoding(url.path()))
    }
}

impl std::fmt::Debug for AzureBlobFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureBlobFetcher").finish_non_exhaustive()
    }
}
