//! Inbound notification records.

use serde::{Deserialize, Serialize};

/// Event kind that marks a record as actionable.
pub const BLOB_CREATED: &str = "Microsoft.Storage.BlobCreated";

/// One entry in the inbound notification batch.
///
/// The notification transport appends fields freely; everything beyond the
/// event kind and the object URL is ignored. Both fields are optional so a
/// partially-shaped record deserializes and is skipped instead of failing
/// the batch.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GridEvent {
    /// Storage lifecycle event kind.
    #[serde(rename = "eventType", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Event payload.
    #[serde(default)]
    pub data: GridEventData,
}

/// Payload of a notification record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GridEventData {
    /// URL of the storage object the event refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GridEvent {
    /// Returns true when the event kind is a blob creation.
    #[must_use]
    pub fn is_blob_created(&self) -> bool {
        self.event_type.as_deref() == Some(BLOB_CREATED)
    }
}
