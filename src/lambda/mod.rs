//! Access to the Lambda control plane.
//!
//! The checks only depend on [`LambdaApi`], so they can run against
//! the AWS SDK backed [`LambdaClient`] or against any test double.

#[cfg(feature = "aws_sdk")]
mod aws_sdk;

#[cfg(feature = "aws_sdk")]
#[cfg_attr(docsrs, doc(cfg(feature = "aws_sdk")))]
pub use aws_sdk::LambdaClient;

/// Function metadata returned by the Lambda describe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDetails {
    /// Arn as reported by AWS
    pub function_arn: String,
    /// Name as reported by AWS
    pub function_name: String,
}

/// Read-only view on the Lambda API
#[async_trait::async_trait]
pub trait LambdaApi: Send + Sync {
    /// Describes the function with the given name or arn
    async fn get_function(&self, function_name: &str) -> anyhow::Result<FunctionDetails>;
}

#[async_trait::async_trait]
impl<'a, T: LambdaApi + ?Sized> LambdaApi for &'a T {
    async fn get_function(&self, function_name: &str) -> anyhow::Result<FunctionDetails> {
        (**self).get_function(function_name).await
    }
}
