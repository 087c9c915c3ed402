use serde::Deserialize;

/// A single delivery received from the pull queue.
///
/// The receipt handle is the delete token for this specific delivery and is
/// consumed exactly once, by the relay loop, only after a successful publish.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    /// Queue-assigned identifier, used for logging only
    pub message_id: String,
    /// Raw message body text
    pub body: String,
    /// Receipt handle required to delete this delivery
    pub receipt_handle: String,
}

/// Identifier returned by the pub/sub sink for a successful publish.
/// Observability only; correctness decisions never depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishId(pub String);

impl std::fmt::Display for PublishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference extracted from a storage-event envelope: which object the
/// notification is about. The key is already URL-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEventRef {
    pub bucket: String,
    pub key: String,
    /// Number of records beyond the first in the envelope. Only the first
    /// record is acted upon; the relay loop logs when this is non-zero.
    pub additional_records: usize,
}

/// Outcome of classifying a decoded queue message body.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The body is a storage-event envelope naming an object to fetch
    StorageEvent(StorageEventRef),
    /// Any other JSON body; re-serialized, it is itself the payload
    Opaque(serde_json::Value),
}

/// Wire shape of an S3 event notification envelope. Fields the relay does
/// not act on (event name, timestamps, requester) are ignored on purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEventEnvelope {
    #[serde(rename = "Records")]
    pub records: Vec<StorageEventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageEventRecord {
    pub s3: Option<StorageEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageEntity {
    pub bucket: StorageBucketRef,
    pub object: StorageObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageBucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageObjectRef {
    /// URL-encoded object key, `+` standing for space per form-encoding rules
    pub key: String,
}
