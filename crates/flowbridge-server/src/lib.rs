#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod event;
mod relay;
mod service;

pub mod handler;
pub mod middleware;

#[cfg(test)]
mod test_support;

pub use error::{Error, ErrorKind, Result};
pub use event::{BLOB_CREATED, GridEvent, GridEventData};
pub use relay::{BatchSummary, RecordError, RecordOutcome, SkipReason};
pub use service::ServiceState;
