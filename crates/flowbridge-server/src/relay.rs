//! Record filtering and relay orchestration.

use std::fmt;

use flowbridge_blob::{BlobUrl, FetchError};
use flowbridge_hub::PublishError;
use serde_json::Value;

use crate::event::{BLOB_CREATED, GridEvent};
use crate::service::ServiceState;

/// Tracing target for relay orchestration.
const TRACING_TARGET: &str = "flowbridge_server::relay";

/// Why a record was skipped rather than relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The element does not deserialize as a notification record.
    Malformed,
    /// The event kind is not a blob creation.
    WrongKind(Option<String>),
    /// The record carries no object URL.
    MissingUrl,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed record"),
            Self::WrongKind(Some(kind)) => write!(f, "event kind {kind}"),
            Self::WrongKind(None) => f.write_str("missing event kind"),
            Self::MissingUrl => f.write_str("missing blob URL"),
        }
    }
}

/// Failure absorbed at the record level.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Resolving or downloading the object failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Publishing the fetched content failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Outcome of one record's trip through the relay pipeline.
///
/// Call sites must distinguish "skipped" from "failed": only
/// [`RecordOutcome::Published`] counts toward the batch tally, but a skip
/// is expected traffic while a failure is worth alerting on.
#[derive(Debug)]
pub enum RecordOutcome {
    /// Fetched and published.
    Published,
    /// Not actionable; never an error.
    Skipped(SkipReason),
    /// Actionable but failed at fetch or publish.
    Failed(RecordError),
}

/// Tally for one validated batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records that were fetched and published.
    pub processed: usize,
    /// Records in the inbound batch.
    pub total: usize,
}

/// Decides whether one record should be relayed.
fn filter(record: &Value) -> Result<String, SkipReason> {
    let Ok(event) = serde_json::from_value::<GridEvent>(record.clone()) else {
        return Err(SkipReason::Malformed);
    };

    if event.event_type.as_deref() != Some(BLOB_CREATED) {
        return Err(SkipReason::WrongKind(event.event_type));
    }

    match event.data.url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(SkipReason::MissingUrl),
    }
}

/// Runs one record through filter, fetch, and publish.
pub async fn process_record(state: &ServiceState, record: &Value) -> RecordOutcome {
    let url = match filter(record) {
        Ok(url) => url,
        Err(reason) => {
            tracing::info!(
                target: TRACING_TARGET,
                reason = %reason,
                "Skipping event"
            );
            return RecordOutcome::Skipped(reason);
        }
    };

    tracing::info!(
        target: TRACING_TARGET,
        url = %url,
        "Processing blob"
    );

    let blob_url = match BlobUrl::parse(&url) {
        Ok(blob_url) => blob_url,
        Err(err) => {
            tracing::warn!(
                target: TRACING_TARGET,
                url = %url,
                error = %err,
                "Blob URL rejected"
            );
            return RecordOutcome::Failed(FetchError::from(err).into());
        }
    };

    let content = match state.fetcher().fetch(&blob_url).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(
                target: TRACING_TARGET,
                url = %blob_url,
                error = %err,
                "Blob fetch failed"
            );
            return RecordOutcome::Failed(err.into());
        }
    };

    match state.publisher().publish(&content).await {
        Ok(()) => RecordOutcome::Published,
        Err(err) => {
            tracing::warn!(
                target: TRACING_TARGET,
                url = %blob_url,
                error = %err,
                "Publish failed"
            );
            RecordOutcome::Failed(err.into())
        }
    }
}

/// Processes a validated batch strictly in input order.
///
/// Each record fully completes its fetch/publish pair before the next one
/// begins. Failed records only affect the tally; they never abort the
/// remaining records.
pub async fn process_batch(state: &ServiceState, records: &[Value]) -> BatchSummary {
    let mut processed = 0;

    for record in records {
        if matches!(process_record(state, record).await, RecordOutcome::Published) {
            processed += 1;
        }
    }

    tracing::info!(
        target: TRACING_TARGET,
        processed = processed,
        total = records.len(),
        "Batch complete"
    );

    BatchSummary {
        processed,
        total: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::test_support::{RecordingFetcher, RecordingPublisher, blob_created, test_state};

    #[test]
    fn filter_accepts_blob_created_with_url() {
        let record = blob_created("https://acct.blob.core.windows.net/c/log1.json");
        let url = filter(&record).unwrap();
        assert_eq!(url, "https://acct.blob.core.windows.net/c/log1.json");
    }

    #[test]
    fn filter_skips_other_event_kinds() {
        let record = json!({
            "eventType": "Microsoft.Storage.BlobDeleted",
            "data": {}
        });

        assert_eq!(
            filter(&record),
            Err(SkipReason::WrongKind(Some(
                "Microsoft.Storage.BlobDeleted".to_owned()
            )))
        );
    }

    #[test]
    fn filter_skips_missing_and_empty_urls() {
        let missing = json!({"eventType": BLOB_CREATED, "data": {}});
        assert_eq!(filter(&missing), Err(SkipReason::MissingUrl));

        let empty = json!({"eventType": BLOB_CREATED, "data": {"url": ""}});
        assert_eq!(filter(&empty), Err(SkipReason::MissingUrl));
    }

    #[test]
    fn filter_skips_non_object_records() {
        assert_eq!(filter(&json!("text")), Err(SkipReason::Malformed));
        assert_eq!(filter(&json!(42)), Err(SkipReason::Malformed));
    }

    #[tokio::test]
    async fn malformed_blob_url_fails_without_fetching() {
        let fetcher = Arc::new(RecordingFetcher::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let state = test_state(fetcher.clone(), publisher.clone());

        let outcome = process_record(&state, &blob_created("no scheme at all")).await;

        assert!(matches!(
            outcome,
            RecordOutcome::Failed(RecordError::Fetch(FetchError::InvalidUrl(_)))
        ));
        assert!(fetcher.calls().is_empty());
        assert!(publisher.messages().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_skips_publish() {
        let fetcher = Arc::new(RecordingFetcher::failing());
        let publisher = Arc::new(RecordingPublisher::default());
        let state = test_state(fetcher.clone(), publisher.clone());

        let record = blob_created("https://acct.blob.core.windows.net/c/log1.json");
        let outcome = process_record(&state, &record).await;

        assert!(matches!(
            outcome,
            RecordOutcome::Failed(RecordError::Fetch(_))
        ));
        assert_eq!(fetcher.calls().len(), 1);
        assert!(publisher.messages().is_empty());
    }

    #[tokio::test]
    async fn batch_processes_records_in_input_order() {
        let fetcher = Arc::new(RecordingFetcher::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let state = test_state(fetcher.clone(), publisher.clone());

        let records = vec![
            blob_created("https://acct.blob.core.windows.net/c/first.json"),
            json!({"eventType": "Microsoft.Storage.BlobDeleted", "data": {}}),
            blob_created("https://acct.blob.core.windows.net/c/second.json"),
        ];

        let summary = process_batch(&state, &records).await;

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(
            fetcher.calls(),
            vec![
                "https://acct.blob.core.windows.net/c/first.json".to_owned(),
                "https://acct.blob.core.windows.net/c/second.json".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn failed_record_does_not_abort_the_batch() {
        let fetcher = Arc::new(RecordingFetcher::default());
        let publisher = Arc::new(RecordingPublisher::failing());
        let state = test_state(fetcher.clone(), publisher.clone());

        let records = vec![
            blob_created("https://acct.blob.core.windows.net/c/first.json"),
            blob_created("https://acct.blob.core.windows.net/c/second.json"),
        ];

        let summary = process_batch(&state, &records).await;

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.total, 2);
        // Both records were still attempted.
        assert_eq!(fetcher.calls().len(), 2);
    }
}
