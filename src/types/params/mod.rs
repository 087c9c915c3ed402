pub mod cloud_provider;

use crate::cli::RunCmd;
use crate::BridgeError;

/// QueueArgs - Arguments used to poll the notification queue
#[derive(Debug, Clone)]
pub struct QueueArgs {
    pub queue_name: String,
    pub wait_time_seconds: i32,
    pub max_messages: i32,
}

/// PublisherArgs - Arguments used to publish relayed payloads
#[derive(Debug, Clone)]
pub struct PublisherArgs {
    pub topic_name: String,
}

/// RelayParams - Arguments tuning the relay loop
#[derive(Debug, Clone)]
pub struct RelayParams {
    pub poll_backoff_seconds: u64,
}

impl TryFrom<RunCmd> for QueueArgs {
    type Error = BridgeError;
    fn try_from(run_cmd: RunCmd) -> Result<Self, Self::Error> {
        if run_cmd.aws_sqs_args.queue_name.is_empty() {
            return Err(BridgeError::ConfigError("Queue name must not be empty".to_string()));
        }
        // SQS rejects receive batches outside 1..=10; catch it at startup
        // instead of on every receive call.
        if !(1..=10).contains(&run_cmd.aws_sqs_args.max_messages) {
            return Err(BridgeError::ConfigError("Max messages per poll must be between 1 and 10".to_string()));
        }
        Ok(Self {
            queue_name: run_cmd.aws_sqs_args.queue_name,
            wait_time_seconds: run_cmd.aws_sqs_args.wait_time_seconds,
            max_messages: run_cmd.aws_sqs_args.max_messages,
        })
    }
}

impl TryFrom<RunCmd> for PublisherArgs {
    type Error = BridgeError;
    fn try_from(run_cmd: RunCmd) -> Result<Self, Self::Error> {
        if run_cmd.aws_sns_args.topic_name.is_empty() {
            return Err(BridgeError::ConfigError("Topic name must not be empty".to_string()));
        }
        Ok(Self { topic_name: run_cmd.aws_sns_args.topic_name })
    }
}

impl From<RunCmd> for RelayParams {
    fn from(run_cmd: RunCmd) -> Self {
        Self { poll_backoff_seconds: run_cmd.service_args.poll_backoff_seconds }
    }
}
