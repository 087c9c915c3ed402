use crate::types::message::{Classification, StorageEventEnvelope, StorageEventRef};
use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Classify a decoded queue message body.
///
/// A body is a storage-event envelope when it carries a non-empty `Records`
/// list whose first record holds a well-formed `s3` sub-structure; the
/// object key is URL-decoded on extraction. Everything else is opaque and
/// relayed as-is. Only the first record is acted upon; the count of ignored
/// trailing records travels with the reference so the caller can log it.
///
/// Classification is pure and total over parsed JSON: bodies that are not
/// valid JSON never reach it, the relay loop fails them at parse time.
pub fn classify(body: &Value) -> Classification {
    if let Ok(envelope) = serde_json::from_value::<StorageEventEnvelope>(body.clone()) {
        if let Some(first) = envelope.records.first() {
            if let Some(s3) = &first.s3 {
                return Classification::StorageEvent(StorageEventRef {
                    bucket: s3.bucket.name.clone(),
                    key: decode_object_key(&s3.object.key),
                    additional_records: envelope.records.len() - 1,
                });
            }
        }
    }
    Classification::Opaque(body.clone())
}

/// Decode a URL-encoded object key, treating `+` as space per standard
/// form-encoding rules. Invalid percent-escapes decode lossily rather than
/// failing the message.
pub fn decode_object_key(raw: &str) -> String {
    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed).decode_utf8_lossy().into_owned()
}
