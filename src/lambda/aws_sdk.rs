use super::{FunctionDetails, LambdaApi};
use crate::Config;

/// Lambda client using the official AWS SDK
#[derive(Clone)]
pub struct LambdaClient {
    client: aws_sdk_lambda::Client,
}

impl std::fmt::Debug for LambdaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaClient").field("client", &"[...]").finish()
    }
}

impl LambdaClient {
    /// Creates a client from the standard AWS credential chain.
    ///
    /// Region and endpoint may be overridden by `config`. Every
    /// operation is limited to `config.timeout` and never retried.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        use aws_config::retry::RetryConfig;
        use aws_config::timeout::TimeoutConfig;
        use aws_config::BehaviorVersion;
        use aws_sdk_lambda::config::Region;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(1))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            );
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;
        if sdk_config.region().is_none() {
            anyhow::bail!("Unable to load SDK config: no AWS region configured");
        }
        Ok(Self::from_client(aws_sdk_lambda::Client::new(&sdk_config)))
    }

    /// Wraps an already configured SDK client
    pub fn from_client(client: aws_sdk_lambda::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl LambdaApi for LambdaClient {
    async fn get_function(&self, function_name: &str) -> anyhow::Result<FunctionDetails> {
        use anyhow::Context;

        let function = self
            .client
            .get_function()
            .function_name(function_name)
            .send()
            .await
            .with_context(|| format!("Unable to fetch function: {}", function_name))?;
        let configuration = function.configuration().with_context(|| {
            format!("Configuration is unavailable for function: {}", function_name)
        })?;
        let function_arn = configuration
            .function_arn()
            .with_context(|| format!("Arn is unavailable for function: {}", function_name))?;
        let name = configuration
            .function_name()
            .with_context(|| format!("Name is unavailable for function: {}", function_name))?;
        Ok(FunctionDetails {
            function_arn: function_arn.to_owned(),
            function_name: name.to_owned(),
        })
    }
}
