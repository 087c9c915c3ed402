use crate::core::client::publisher::{MockPublisherClient, PublisherError};
use crate::core::client::queue::{MockQueueClient, QueueError};
use crate::core::client::storage::{MockStorageClient, StorageError};
use crate::core::config::Config;
use crate::error::RelayError;
use crate::relay::RelayWorker;
use crate::types::message::{PublishId, QueueMessage};
use crate::types::params::RelayParams;
use bytes::Bytes;
use mockall::Sequence;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn storage_event_body(bucket: &str, encoded_key: &str) -> String {
    format!(r#"{{"Records":[{{"s3":{{"bucket":{{"name":"{}"}},"object":{{"key":"{}"}}}}}}]}}"#, bucket, encoded_key)
}

fn queue_message(body: &str, receipt_handle: &str) -> QueueMessage {
    QueueMessage { message_id: "m-1".to_string(), body: body.to_string(), receipt_handle: receipt_handle.to_string() }
}

fn worker_with(queue: MockQueueClient, storage: MockStorageClient, publisher: MockPublisherClient) -> RelayWorker {
    let config = Config::new(
        RelayParams { poll_backoff_seconds: 1 },
        Box::new(queue),
        Box::new(storage),
        Box::new(publisher),
    );
    RelayWorker::new(Arc::new(config), CancellationToken::new())
}

/// A storage-event notification is resolved against the blob store with the
/// URL-decoded key, the fetched bytes are published verbatim, and the source
/// message is deleted with its original receipt token, in that order.
#[rstest]
#[tokio::test]
async fn storage_event_message_publishes_blob_then_deletes() {
    let blob: &[u8] = br#"{"recordId":"r1","userEmail":"x@y.com","value":5}"#;
    let mut seq = Sequence::new();

    let mut queue = MockQueueClient::new();
    let body = storage_event_body("b1", "dir/file+1.json");
    queue
        .expect_receive_messages()
        .times(1)
        .returning(move || Ok(vec![queue_message(&body, "receipt-1")]));

    let mut storage = MockStorageClient::new();
    storage
        .expect_get_object()
        .withf(|bucket, key| bucket == "b1" && key == "dir/file 1.json")
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_, _| Ok(Bytes::from_static(br#"{"recordId":"r1","userEmail":"x@y.com","value":5}"#)));

    let mut publisher = MockPublisherClient::new();
    publisher
        .expect_publish()
        .withf(move |payload| payload.as_ref() == blob)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(PublishId("p-1".to_string())));

    queue
        .expect_delete_message()
        .withf(|receipt_handle| receipt_handle == "receipt-1")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 1);
}

/// A body that is not a storage-event envelope is relayed as its own
/// re-serialized JSON, then deleted.
#[rstest]
#[tokio::test]
async fn opaque_body_is_relayed_as_serialized_json() {
    let mut queue = MockQueueClient::new();
    queue
        .expect_receive_messages()
        .times(1)
        .returning(|| Ok(vec![queue_message(r#"{"foo":"bar"}"#, "receipt-2")]));

    let storage = MockStorageClient::new();

    let expected = serde_json::to_vec(&serde_json::json!({"foo": "bar"})).unwrap();
    let mut publisher = MockPublisherClient::new();
    publisher
        .expect_publish()
        .withf(move |payload| payload.as_ref() == expected.as_slice())
        .times(1)
        .returning(|_| Ok(PublishId("p-2".to_string())));

    queue
        .expect_delete_message()
        .withf(|receipt_handle| receipt_handle == "receipt-2")
        .times(1)
        .returning(|_| Ok(()));

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 1);
}

/// Deletion happens only after a successful publish: a publish failure must
/// leave the message on the queue for redelivery.
#[rstest]
#[tokio::test]
async fn publish_failure_leaves_message_on_queue() {
    let mut queue = MockQueueClient::new();
    queue
        .expect_receive_messages()
        .times(1)
        .returning(|| Ok(vec![queue_message(r#"{"foo":"bar"}"#, "receipt-3")]));
    queue.expect_delete_message().never();

    let storage = MockStorageClient::new();

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().times(1).returning(|_| Err(PublisherError::MissingPublishId));

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 0);
}

/// A fetch failure aborts the message before publish: zero publish calls and
/// zero delete calls.
#[rstest]
#[tokio::test]
async fn fetch_failure_skips_publish_and_delete() {
    let mut queue = MockQueueClient::new();
    let body = storage_event_body("b1", "missing.json");
    queue.expect_receive_messages().times(1).returning(move || Ok(vec![queue_message(&body, "receipt-4")]));
    queue.expect_delete_message().never();

    let mut storage = MockStorageClient::new();
    storage
        .expect_get_object()
        .times(1)
        .returning(|_, _| Err(StorageError::ObjectStreamError("no such key".to_string())));

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().never();

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 0);
}

/// A body that is not JSON fails at parse time without touching the store,
/// the sink or the delete call; the error is a per-message failure.
#[rstest]
#[tokio::test]
async fn malformed_body_fails_without_side_effects() {
    let mut queue = MockQueueClient::new();
    queue.expect_delete_message().never();

    let mut storage = MockStorageClient::new();
    storage.expect_get_object().never();

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().never();

    let worker = worker_with(queue, storage, publisher);
    let message = queue_message("definitely not json", "receipt-5");
    assert!(matches!(worker.relay_message(&message).await, Err(RelayError::Parse(_))));
}

/// An empty receive is not an error; the loop just polls again.
#[rstest]
#[tokio::test]
async fn empty_receive_relays_nothing() {
    let mut queue = MockQueueClient::new();
    queue.expect_receive_messages().times(1).returning(|| Ok(vec![]));
    queue.expect_delete_message().never();

    let mut storage = MockStorageClient::new();
    storage.expect_get_object().never();

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().never();

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 0);
}

/// A failed receive call propagates so the loop can back off and retry.
#[rstest]
#[tokio::test]
async fn receive_failure_propagates_to_caller() {
    let mut queue = MockQueueClient::new();
    queue
        .expect_receive_messages()
        .times(1)
        .returning(|| Err(QueueError::FailedToGetQueueUrl("data-processing-queue".to_string())));

    let worker = worker_with(queue, MockStorageClient::new(), MockPublisherClient::new());
    assert!(worker.poll_once().await.is_err());
}

/// A failed receive does not terminate the loop: the worker sleeps the
/// configured backoff, polls again, and only stops once the cancellation
/// token fires. The paused clock makes the backoff observable without a
/// real sleep.
#[rstest]
#[tokio::test(start_paused = true)]
async fn run_backs_off_after_receive_failure_then_retries() {
    let token = CancellationToken::new();

    let mut queue = MockQueueClient::new();
    queue
        .expect_receive_messages()
        .times(1)
        .returning(|| Err(QueueError::FailedToGetQueueUrl("data-processing-queue".to_string())));
    let stop = token.clone();
    queue.expect_receive_messages().times(1).returning(move || {
        stop.cancel();
        Ok(vec![])
    });
    queue.expect_delete_message().never();

    let config = Config::new(
        RelayParams { poll_backoff_seconds: 1 },
        Box::new(queue),
        Box::new(MockStorageClient::new()),
        Box::new(MockPublisherClient::new()),
    );
    let worker = RelayWorker::new(Arc::new(config), token);

    let started = tokio::time::Instant::now();
    worker.run().await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));
}

/// Cancelling the token stops the loop without another receive call.
#[rstest]
#[tokio::test]
async fn run_stops_immediately_when_already_cancelled() {
    let mut queue = MockQueueClient::new();
    queue.expect_receive_messages().never();

    let token = CancellationToken::new();
    token.cancel();

    let config = Config::new(
        RelayParams { poll_backoff_seconds: 1 },
        Box::new(queue),
        Box::new(MockStorageClient::new()),
        Box::new(MockPublisherClient::new()),
    );
    let worker = RelayWorker::new(Arc::new(config), token);

    worker.run().await.unwrap();
}

/// A delete failure after a successful publish is reported as an
/// acknowledge error; the payload has already been published once and the
/// redelivered message will produce an at-least-once duplicate.
#[rstest]
#[tokio::test]
async fn delete_failure_after_publish_is_an_acknowledge_error() {
    let mut queue = MockQueueClient::new();
    queue
        .expect_delete_message()
        .times(1)
        .returning(|_| Err(QueueError::FailedToGetQueueUrl("data-processing-queue".to_string())));

    let storage = MockStorageClient::new();

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().times(1).returning(|_| Ok(PublishId("p-6".to_string())));

    let worker = worker_with(queue, storage, publisher);
    let message = queue_message(r#"{"foo":"bar"}"#, "receipt-6");
    assert!(matches!(worker.relay_message(&message).await, Err(RelayError::Acknowledge(_))));
}

/// One bad message must not stop the rest of the batch from being relayed.
#[rstest]
#[tokio::test]
async fn bad_message_does_not_halt_the_batch() {
    let mut queue = MockQueueClient::new();
    queue.expect_receive_messages().times(1).returning(|| {
        Ok(vec![
            QueueMessage {
                message_id: "m-bad".to_string(),
                body: "not json".to_string(),
                receipt_handle: "receipt-bad".to_string(),
            },
            QueueMessage {
                message_id: "m-good".to_string(),
                body: r#"{"foo":"bar"}"#.to_string(),
                receipt_handle: "receipt-good".to_string(),
            },
        ])
    });
    queue.expect_delete_message().withf(|receipt_handle| receipt_handle == "receipt-good").times(1).returning(|_| Ok(()));

    let storage = MockStorageClient::new();

    let mut publisher = MockPublisherClient::new();
    publisher.expect_publish().times(1).returning(|_| Ok(PublishId("p-7".to_string())));

    let worker = worker_with(queue, storage, publisher);
    assert_eq!(worker.poll_once().await.unwrap(), 1);
}
