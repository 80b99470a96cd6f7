#![cfg(feature = "aws_sdk")]

//! Runs the checks against a real deployment.
//!
//! ```bash
//! cd examples/source_from_zip && terraform apply
//! LAMBDA_ACCEPTANCE_TERRAFORM_DIR=examples/source_from_zip \
//!     cargo test --test live -- --ignored
//! ```

#[ignore]
#[test]
fn test_deployed_lambda() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("Unable to setup logging");
    let config = lambda_acceptance::Config::from_env().expect("Unable to load config");
    let report = lambda_acceptance::exec_tokio(&config).expect("Unable to run checks");
    report.into_result().expect("Acceptance checks failed");
}
