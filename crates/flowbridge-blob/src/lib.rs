#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod blob_url;
mod error;
mod fetcher;

pub use blob_url::{BlobUrl, BlobUrlError};
pub use error::{FetchError, FetchResult};
pub use fetcher::{AzureBlobFetcher, BlobFetcher};

/// Tracing target for blob fetch operations.
pub const TRACING_TARGET: &str = "flowbridge_blob";
