use crate::cli::provider::aws::AWSConfigCliArgs;
use aws_config::{Region, SdkConfig};

#[derive(Debug, Clone)]
pub struct AWSCredentials {
    pub endpoint_url: Option<url::Url>,
    pub region: Option<String>,
}

impl AWSCredentials {
    /// Load the SDK config from the environment, applying the endpoint and
    /// region overrides. The endpoint override is what points the service at
    /// a LocalStack-style local substrate instead of real AWS.
    pub async fn get_aws_config(&self) -> SdkConfig {
        let mut loader = aws_config::from_env();
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.as_str());
        }
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        loader.load().await
    }
}

impl From<AWSConfigCliArgs> for AWSCredentials {
    fn from(args: AWSConfigCliArgs) -> Self {
        Self { endpoint_url: args.aws_endpoint_url, region: args.aws_region }
    }
}
