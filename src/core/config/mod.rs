use std::sync::Arc;

use crate::cli::RunCmd;
use crate::core::client::{PublisherClient, QueueClient, S3Storage, SnsPublisher, SqsQueue, StorageClient};
use crate::core::cloud::CloudProvider;
use crate::types::params::cloud_provider::AWSCredentials;
use crate::types::params::{PublisherArgs, QueueArgs, RelayParams};
use crate::BridgeResult;
use tracing::info;

/// The app config, constructed once at startup and shared by the relay
/// workers. Clients are trait objects injected through the constructor so
/// tests can substitute fakes; there is no ambient global client state.
pub struct Config {
    /// The relay loop parameters
    relay_params: RelayParams,
    /// Queue client
    queue: Box<dyn QueueClient>,
    /// Storage client
    storage: Box<dyn StorageClient>,
    /// Publisher client
    publisher: Box<dyn PublisherClient>,
}

impl Config {
    pub fn new(
        relay_params: RelayParams,
        queue: Box<dyn QueueClient>,
        storage: Box<dyn StorageClient>,
        publisher: Box<dyn PublisherClient>,
    ) -> Self {
        Self { relay_params, queue, storage, publisher }
    }

    /// Setup the relay service: build the AWS clients and perform the two
    /// startup resolutions. Either resolution failing means the service is
    /// misconfigured and the process must not start relaying.
    pub async fn setup(run_cmd: &RunCmd) -> BridgeResult<Self> {
        let aws_cred = AWSCredentials::from(run_cmd.aws_config_args.clone());
        let aws_config = aws_cred.get_aws_config().await;
        let provider_config = Arc::new(CloudProvider::AWS(Box::new(aws_config)));

        let queue_args = QueueArgs::try_from(run_cmd.clone())?;
        let publisher_args = PublisherArgs::try_from(run_cmd.clone())?;
        let relay_params = RelayParams::from(run_cmd.clone());

        let sdk_config = provider_config.get_aws_client_or_panic();
        let queue: Box<dyn QueueClient> = Box::new(SqsQueue::new(sdk_config, &queue_args));
        let storage: Box<dyn StorageClient> = Box::new(S3Storage::new(sdk_config));
        let publisher: Box<dyn PublisherClient> = Box::new(SnsPublisher::new(sdk_config, &publisher_args));

        let queue_url = queue.resolve_queue_url().await?;
        info!(queue_url = %queue_url, "Connected to queue");

        let topic_arn = publisher.resolve_topic().await?;
        info!(topic_arn = %topic_arn, "Resolved publish topic");

        Ok(Self::new(relay_params, queue, storage, publisher))
    }

    pub fn relay_params(&self) -> &RelayParams {
        &self.relay_params
    }

    pub fn queue(&self) -> &dyn QueueClient {
        self.queue.as_ref()
    }

    pub fn storage(&self) -> &dyn StorageClient {
        self.storage.as_ref()
    }

    pub fn publisher(&self) -> &dyn PublisherClient {
        self.publisher.as_ref()
    }
}
