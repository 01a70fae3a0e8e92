//! Credential acquisition for the relay's external collaborators.
//!
//! The storage and ingestion clients never read authentication material
//! themselves; they are handed a [`CredentialProvider`] and ask it for the
//! current credential scoped to their collaborator. This keeps both clients
//! substitutable with test doubles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CREDENTIALS;

/// Result type for credential operations.
pub type CredentialResult<T, E = CredentialError> = std::result::Result<T, E>;

/// Errors that can occur while acquiring a credential.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The provider could not produce a credential for the requested scope.
    #[error("credential unavailable for {scope}: {reason}")]
    Unavailable {
        /// Scope the credential was requested for.
        scope: CredentialScope,
        /// Provider-specific failure description.
        reason: String,
    },
}

impl CredentialError {
    /// Creates a new unavailable error.
    pub fn unavailable(scope: CredentialScope, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            scope,
            reason: reason.into(),
        }
    }
}

/// The collaborator a credential is being requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialScope {
    /// Object-storage reads.
    Storage,
    /// Stream-ingestion publishes.
    Ingest,
}

impl CredentialScope {
    /// Returns the scope as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Ingest => "ingest",
        }
    }
}

impl fmt::Display for CredentialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authentication credential usable by one of the relay's collaborators.
///
/// Not every variant is meaningful to every collaborator; a client that is
/// handed a shape it cannot apply falls back to anonymous access and defers
/// the failure to the service call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Credential {
    /// Storage account shared key.
    AccountKey {
        /// Base64-encoded account key.
        key: String,
    },
    /// Shared access signature token.
    SasToken {
        /// SAS token string (query-string form).
        token: String,
    },
    /// Bearer token authentication.
    Token {
        /// Token string.
        token: String,
    },
    /// Username and password authentication.
    UserPassword {
        /// Username for authentication.
        user: String,
        /// Password for authentication.
        pass: String,
    },
    /// No authentication material.
    Anonymous,
}

impl Credential {
    /// Create an account-key credential.
    pub fn account_key(key: impl Into<String>) -> Self {
        Self::AccountKey { key: key.into() }
    }

    /// Create a SAS-token credential.
    pub fn sas_token(token: impl Into<String>) -> Self {
        Self::SasToken {
            token: token.into(),
        }
    }

    /// Create a bearer-token credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Create user/password credentials.
    pub fn user_password(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::UserPassword {
            user: user.into(),
            pass: pass.into(),
        }
    }

    /// Returns true when no authentication material is carried.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// Capability that yields the current credential for a collaborator.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Obtains the current credential for the given scope.
    async fn credential(&self, scope: CredentialScope) -> CredentialResult<Credential>;
}

/// Resolves credentials from the process environment.
///
/// Resolution chains, first match wins:
///
/// - [`CredentialScope::Storage`]: `AZURE_STORAGE_ACCOUNT_KEY`,
///   `AZURE_STORAGE_SAS_TOKEN`, anonymous.
/// - [`CredentialScope::Ingest`]: `EVENT_HUB_TOKEN`,
///   `EVENT_HUB_USER` + `EVENT_HUB_PASS`, anonymous.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl EnvCredentials {
    /// Creates a new environment-backed provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves a credential for a scope through the given variable lookup.
    fn resolve(scope: CredentialScope, lookup: impl Fn(&str) -> Option<String>) -> Credential {
        match scope {
            CredentialScope::Storage => {
                if let Some(key) = lookup("AZURE_STORAGE_ACCOUNT_KEY") {
                    Credential::AccountKey { key }
                } else if let Some(token) = lookup("AZURE_STORAGE_SAS_TOKEN") {
                    Credential::SasToken { token }
                } else {
                    Credential::Anonymous
                }
            }
            CredentialScope::Ingest => {
                if let Some(token) = lookup("EVENT_HUB_TOKEN") {
                    Credential::Token { token }
                } else if let (Some(user), Some(pass)) =
                    (lookup("EVENT_HUB_USER"), lookup("EVENT_HUB_PASS"))
                {
                    Credential::UserPassword { user, pass }
                } else {
                    Credential::Anonymous
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl CredentialProvider for EnvCredentials {
    async fn credential(&self, scope: CredentialScope) -> CredentialResult<Credential> {
        let credential = Self::resolve(scope, |key| std::env::var(key).ok());

        tracing::debug!(
            target: TRACING_TARGET_CREDENTIALS,
            scope = %scope,
            anonymous = credential.is_anonymous(),
            "Resolved credential from environment"
        );

        Ok(credential)
    }
}

/// Returns one fixed credential regardless of scope.
///
/// Useful for wiring a single pre-shared secret and as a test double.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credential: Credential,
}

impl StaticCredentials {
    /// Creates a provider that always yields the given credential.
    #[must_use]
    pub const fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Creates a provider that always yields [`Credential::Anonymous`].
    #[must_use]
    pub const fn anonymous() -> Self {
        Self::new(Credential::Anonymous)
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentials {
    async fn credential(&self, _scope: CredentialScope) -> CredentialResult<Credential> {
        Ok(self.credential.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn storage_prefers_account_key() {
        let env = vars(&[
            ("AZURE_STORAGE_ACCOUNT_KEY", "key=="),
            ("AZURE_STORAGE_SAS_TOKEN", "sv=2024"),
        ]);
        let credential = EnvCredentials::resolve(CredentialScope::Storage, |k| {
            env.get(k).cloned()
        });

        assert!(matches!(credential, Credential::AccountKey { key } if key == "key=="));
    }

    #[test]
    fn storage_falls_back_to_sas_token() {
        let env = vars(&[("AZURE_STORAGE_SAS_TOKEN", "sv=2024")]);
        let credential = EnvCredentials::resolve(CredentialScope::Storage, |k| {
            env.get(k).cloned()
        });

        assert!(matches!(credential, Credential::SasToken { token } if token == "sv=2024"));
    }

    #[test]
    fn ingest_user_requires_matching_pass() {
        let env = vars(&[("EVENT_HUB_USER", "relay")]);
        let credential =
            EnvCredentials::resolve(CredentialScope::Ingest, |k| env.get(k).cloned());

        assert!(credential.is_anonymous());
    }

    #[test]
    fn ingest_prefers_token_over_user_pass() {
        let env = vars(&[
            ("EVENT_HUB_TOKEN", "jwt"),
            ("EVENT_HUB_USER", "relay"),
            ("EVENT_HUB_PASS", "secret"),
        ]);
        let credential =
            EnvCredentials::resolve(CredentialScope::Ingest, |k| env.get(k).cloned());

        assert!(matches!(credential, Credential::Token { token } if token == "jwt"));
    }

    #[test]
    fn empty_environment_is_anonymous() {
        for scope in [CredentialScope::Storage, CredentialScope::Ingest] {
            let credential = EnvCredentials::resolve(scope, |_| None);
            assert!(credential.is_anonymous());
        }
    }

    #[tokio::test]
    async fn static_provider_ignores_scope() -> CredentialResult<()> {
        let provider = StaticCredentials::new(Credential::token("jwt"));

        for scope in [CredentialScope::Storage, CredentialScope::Ingest] {
            let credential = provider.credential(scope).await?;
            assert!(matches!(credential, Credential::Token { token } if token == "jwt"));
        }
        Ok(())
    }

    #[test]
    fn scope_display_names() {
        assert_eq!(CredentialScope::Storage.to_string(), "storage");
        assert_eq!(CredentialScope::Ingest.to_string(), "ingest");
    }
}
