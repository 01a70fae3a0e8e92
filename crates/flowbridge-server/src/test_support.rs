//! Test doubles for the relay's collaborators.

use std::sync::{Arc, Mutex};

use flowbridge_blob::{BlobFetcher, BlobUrl, FetchError, FetchResult};
use flowbridge_hub::{HubPublisher, PublishError, PublishResult};
use serde_json::{Value, json};

use crate::service::ServiceState;

/// Returns a blob-created record pointing at the given URL.
pub fn blob_created(url: &str) -> Value {
    json!({
        "eventType": "Microsoft.Storage.BlobCreated",
        "data": {"url": url}
    })
}

/// Blob fetcher double that records calls and replays a scripted result.
#[derive(Debug)]
pub struct RecordingFetcher {
    calls: Mutex<Vec<String>>,
    fail: bool,
    content: String,
}

impl Default for RecordingFetcher {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
            content: r#"{"records": []}"#.to_owned(),
        }
    }
}

impl RecordingFetcher {
    /// Returns a fetcher that succeeds with the given content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Returns a fetcher whose every call fails with a not-found error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns the fetched URLs in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BlobFetcher for RecordingFetcher {
    async fn fetch(&self, url: &BlobUrl) -> FetchResult<String> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.fail {
            Err(FetchError::not_found(url.path()))
        } else {
            Ok(self.content.clone())
        }
    }
}

/// Hub publisher double that records payloads and replays a scripted result.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingPublisher {
    /// Returns a publisher whose every call fails like an unset namespace.
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns the published payloads in call order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HubPublisher for RecordingPublisher {
    async fn publish(&self, content: &str) -> PublishResult<()> {
        if self.fail {
            return Err(PublishError::config(
                "EVENT_HUB_NAMESPACE environment variable not set",
            ));
        }

        self.messages.lock().unwrap().push(content.to_owned());
        Ok(())
    }
}

/// Builds a [`ServiceState`] around the given doubles.
pub fn test_state(
    fetcher: Arc<RecordingFetcher>,
    publisher: Arc<RecordingPublisher>,
) -> ServiceState {
    ServiceState::new(fetcher, publisher)
}
