#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;
mod publisher;

pub use config::{DEFAULT_HUB_NAME, HubConfig};
pub use error::{PublishError, PublishResult};
pub use publisher::{HubPublisher, NatsHubPublisher};

/// Tracing target for publish operations.
pub const TRACING_TARGET: &str = "flowbridge_hub";
