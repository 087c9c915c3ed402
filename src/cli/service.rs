use clap::Args;

/// Parameters tuning the relay loop itself.
#[derive(Debug, Clone, Args)]
pub struct ServiceCliArgs {
    /// Fixed delay in seconds before retrying after a failed receive call.
    /// This is the only sleep-based backoff in the service; per-message
    /// failures rely on the queue's own redelivery instead.
    #[arg(env = "EVENT_RELAY_POLL_BACKOFF_SECONDS", long, default_value_t = 5)]
    pub poll_backoff_seconds: u64,
}
