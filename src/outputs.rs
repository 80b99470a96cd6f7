use crate::TestContext;

/// Terraform output holding the function arn
pub const FUNCTION_ARN: &str = "lambda_function_arn";
/// Terraform output holding the function name
pub const FUNCTION_NAME: &str = "lambda_function_name";
/// Terraform output holding the function url
pub const FUNCTION_URL: &str = "lambda_function_url";

/// Outputs of the lambda module required by the acceptance checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfrastructureOutputs {
    /// Arn of the deployed function
    pub function_arn: String,
    /// Name of the deployed function
    pub function_name: String,
    /// Function url bound to the deployed function
    pub function_url: String,
}

impl InfrastructureOutputs {
    /// Reads all outputs from `ctx`. Every output must be a non-empty string.
    pub fn read<C: TestContext + ?Sized>(ctx: &C) -> anyhow::Result<Self> {
        Ok(Self {
            function_arn: read_non_empty(ctx, FUNCTION_ARN)?,
            function_name: read_non_empty(ctx, FUNCTION_NAME)?,
            function_url: read_non_empty(ctx, FUNCTION_URL)?,
        })
    }
}

fn read_non_empty<C: TestContext + ?Sized>(ctx: &C, key: &str) -> anyhow::Result<String> {
    use anyhow::Context;

    let value = ctx
        .terraform_output(key)
        .with_context(|| format!("Unable to read terraform output {}", key))?;
    if value.trim().is_empty() {
        anyhow::bail!("Terraform output {} is empty", key);
    }
    Ok(value)
}
