#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod credentials;
mod health;

pub use credentials::{
    Credential, CredentialError, CredentialProvider, CredentialResult, CredentialScope,
    EnvCredentials, StaticCredentials,
};
pub use health::{ServiceHealth, ServiceStatus};

/// Tracing target for credential operations.
pub const TRACING_TARGET_CREDENTIALS: &str = "flowbridge_core::credentials";
