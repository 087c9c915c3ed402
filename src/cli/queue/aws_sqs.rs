use clap::Args;

/// Parameters used to config AWS SQS.
#[derive(Debug, Clone, Args)]
pub struct AWSSQSCliArgs {
    /// The name of the queue to poll for notifications.
    #[arg(env = "EVENT_RELAY_AWS_SQS_QUEUE_NAME", long, default_value = "data-processing-queue")]
    pub queue_name: String,

    /// Long-poll wait in seconds for each receive call. The receive returns
    /// as soon as a message arrives, so this only bounds idle time.
    #[arg(env = "EVENT_RELAY_AWS_SQS_WAIT_TIME_SECONDS", long, default_value_t = 10)]
    pub wait_time_seconds: i32,

    /// Maximum number of messages fetched per poll (1 to 10).
    #[arg(env = "EVENT_RELAY_AWS_SQS_MAX_MESSAGES", long, default_value_t = 1)]
    pub max_messages: i32,
}
