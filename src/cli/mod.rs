use clap::{Parser, Subcommand};

pub mod provider;
pub mod publisher;
pub mod queue;
pub mod service;

use provider::aws::AWSConfigCliArgs;
use publisher::aws_sns::AWSSNSCliArgs;
use queue::aws_sqs::AWSSQSCliArgs;
use service::ServiceCliArgs;

#[derive(Parser, Debug)]
#[command(
    name = "event-relay",
    about = "Event Relay - bridges storage-event notifications from SQS to SNS",
    long_about = "Event Relay polls an SQS queue for notifications, resolves each one into \
    the payload it refers to (fetching object bytes from S3 for storage-event envelopes), \
    republishes the payload to an SNS topic, and deletes the source message only after a \
    successful publish."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the relay service
    #[command(long_about = "Start the relay loop. The queue and topic must already exist; \
        resolution failure at startup is fatal.")]
    Run {
        #[command(flatten)]
        run_command: Box<RunCmd>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct RunCmd {
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    pub aws_sqs_args: AWSSQSCliArgs,

    #[clap(flatten)]
    pub aws_sns_args: AWSSNSCliArgs,

    #[clap(flatten)]
    pub service_args: ServiceCliArgs,
}
