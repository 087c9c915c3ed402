use clap::Args;

/// Parameters used to config AWS SNS.
#[derive(Debug, Clone, Args)]
pub struct AWSSNSCliArgs {
    /// The name of the SNS topic the relayed payloads are published to.
    #[arg(env = "EVENT_RELAY_AWS_SNS_TOPIC_NAME", long, default_value = "localstack-events")]
    pub topic_name: String,
}
