//! This crate provides acceptance checks for lambda functions
//! provisioned with terraform. It compares the terraform outputs
//! of an applied example against the live function in AWS and
//! invokes the function url of the active example.
//!
//! # Running against a deployment
//!
//! Apply one of the examples with terraform, then point [`Config`] at the
//! working directory and use either [`exec`] or [`exec_tokio`]:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let config = lambda_acceptance::Config::new("examples/source_from_zip");
//!     lambda_acceptance::exec_tokio(&config)?.into_result()
//! }
//! ```
//!
//! The active [`Scenario`] is inferred from the name of the working directory
//! unless it is set explicitly. Invocation checks of other scenarios are skipped.
//!
//! # Checks
//!
//! * `lambda_function_exists`: The function returned by `GetFunction` has the
//!   arn and name reported by terraform.
//! * `invoke_source_from_folder`: A GET on the function url returns a body
//!   containing `examples/source_from_folder`.
//! * `invoke_source_from_zip`: A GET on the function url returns a body
//!   containing `examples/source_from_zip`.
//!
//! Failures of a check are collected in its [`Outcome`] and never stop the
//! following checks. Only errors while loading configuration or terraform
//! outputs abort the run.
//!
//! # Custom clients
//!
//! [`AcceptanceCheck`] only depends on the [`TestContext`], [`LambdaApi`] and
//! [`HttpApi`] traits. Any of them can be replaced, e.g. to run the checks
//! without network access:
//!
//! ```no_run
//! struct Lambda;
//!
//! #[async_trait::async_trait]
//! impl lambda_acceptance::LambdaApi for Lambda {
//!     async fn get_function(
//!         &self,
//!         function_name: &str,
//!     ) -> anyhow::Result<lambda_acceptance::FunctionDetails> {
//!         Ok(lambda_acceptance::FunctionDetails {
//!             function_arn: format!("arn:aws:lambda:eu-west-1:123456789012:function:{}", function_name),
//!             function_name: function_name.to_owned(),
//!         })
//!     }
//! }
//!
//! async fn run(ctx: &lambda_acceptance::TerraformContext) -> anyhow::Result<()> {
//!     let http = lambda_acceptance::HttpClient::new(std::time::Duration::from_secs(10))?;
//!     let check = lambda_acceptance::AcceptanceCheck::new(Lambda, http);
//!     check.run(ctx).await?.into_result()
//! }
//! ```
//!
//! # Timeouts and retries
//!
//! Every HTTP request and every AWS operation is limited by [`Config::timeout`].
//! Nothing is retried. The checks assume the infrastructure is stable once
//! terraform apply finished.

#![warn(
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_ascii_idents,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unstable_features,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cargo,
    clippy::nursery
)]
#![allow(clippy::multiple_crate_versions, clippy::future_not_send)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod check;
mod config;
mod context;
mod http;
mod lambda;
mod outputs;
mod report;
mod scenario;

pub use check::{invocation_check_name, AcceptanceCheck, FUNCTION_EXISTS};
pub use config::{
    Config, DEFAULT_TIMEOUT, ENV_SCENARIO, ENV_TERRAFORM_BINARY, ENV_TERRAFORM_DIR,
    ENV_TIMEOUT_SECS,
};
pub use context::{TerraformContext, TestContext};
pub use http::{HttpApi, HttpClient};
#[cfg(feature = "aws_sdk")]
pub use lambda::LambdaClient;
pub use lambda::{FunctionDetails, LambdaApi};
pub use outputs::{InfrastructureOutputs, FUNCTION_ARN, FUNCTION_NAME, FUNCTION_URL};
pub use report::{CheckReport, Outcome, Report};
pub use scenario::Scenario;

#[cfg(test)]
use simple_logger as _;

/// Entrypoint for synchronous callers like plain `#[test]`
/// functions. This function sets up a multi-thread tokio
/// runtime and executes [`exec`]. If you already have your
/// own runtime, use the [`exec`] function.
#[cfg(feature = "aws_sdk")]
#[cfg_attr(docsrs, doc(cfg(feature = "aws_sdk")))]
pub fn exec_tokio(config: &Config) -> anyhow::Result<Report> {
    use anyhow::Context;
    use tokio::runtime::Builder;

    Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Unable to build tokio runtime")?
        .block_on(exec(config))
}

/// Loads terraform outputs and AWS configuration as described
/// by `config` and runs all checks against the deployment.
/// Requires a running tokio runtime.
///
/// Returns an error only if configuration or outputs could not
/// be loaded. Check failures are part of the returned [`Report`].
#[cfg(feature = "aws_sdk")]
#[cfg_attr(docsrs, doc(cfg(feature = "aws_sdk")))]
pub async fn exec(config: &Config) -> anyhow::Result<Report> {
    let ctx = TerraformContext::load(
        &config.terraform_dir,
        &config.terraform_binary,
        config.scenario,
    )?;
    let lambda = LambdaClient::new(config).await?;
    let http = HttpClient::new(config.timeout)?;
    let report = AcceptanceCheck::new(lambda, http).run(&ctx).await?;
    log::info!("Acceptance checks completed\n{}", report);
    Ok(report)
}
