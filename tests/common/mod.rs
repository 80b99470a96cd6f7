use lambda_acceptance::{FunctionDetails, HttpApi, LambdaApi, Scenario, TestContext};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ARN: &str = "arn:aws:lambda:eu-west-1:123456789012:function:f";
pub const NAME: &str = "f";
pub const URL: &str = "https://x.lambda-url.aws/";

pub fn setup_logging() {
    // Multiple tests share one process, only the first init succeeds
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init();
}

pub struct Context {
    pub outputs: HashMap<&'static str, &'static str>,
    pub scenario: Option<Scenario>,
}

impl Context {
    pub fn new(scenario: Option<Scenario>) -> Self {
        let outputs = [
            ("lambda_function_arn", ARN),
            ("lambda_function_name", NAME),
            ("lambda_function_url", URL),
        ]
        .into_iter()
        .collect();
        Self { outputs, scenario }
    }
}

impl TestContext for Context {
    fn terraform_output(&self, key: &str) -> anyhow::Result<String> {
        self.outputs
            .get(key)
            .map(|v| (*v).to_owned())
            .ok_or_else(|| anyhow::anyhow!("Output {} is not defined", key))
    }

    fn active_scenario(&self) -> Option<Scenario> {
        self.scenario
    }
}

pub struct Lambda {
    pub response: Result<FunctionDetails, String>,
    pub calls: AtomicUsize,
}

impl Lambda {
    pub fn returning(function_arn: &str, function_name: &str) -> Self {
        Self {
            response: Ok(FunctionDetails {
                function_arn: function_arn.to_owned(),
                function_name: function_name.to_owned(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl LambdaApi for Lambda {
    async fn get_function(&self, function_name: &str) -> anyhow::Result<FunctionDetails> {
        assert_eq!(function_name, NAME);
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

pub struct Http {
    pub response: Result<String, String>,
    pub calls: AtomicUsize,
}

impl Http {
    pub fn returning(body: &str) -> Self {
        Self {
            response: Ok(body.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl HttpApi for Http {
    async fn get(&self, url: &str) -> anyhow::Result<String> {
        assert_eq!(url, URL);
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(|e| anyhow::anyhow!(e))
    }
}
