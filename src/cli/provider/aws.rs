use clap::Args;
use url::Url;

/// Parameters used to config AWS.
///
/// Credentials themselves come from the standard SDK chain (environment,
/// profile, instance role); only the knobs that differ between a real
/// deployment and a LocalStack-style local substrate live here.
#[derive(Debug, Clone, Args)]
pub struct AWSConfigCliArgs {
    /// Endpoint override for the queue, storage and publisher services.
    /// Used to point all three clients at a local AWS emulator.
    #[arg(env = "EVENT_RELAY_AWS_ENDPOINT_URL", long)]
    pub aws_endpoint_url: Option<Url>,

    /// The AWS region.
    #[arg(env = "EVENT_RELAY_AWS_REGION", long)]
    pub aws_region: Option<String>,
}
