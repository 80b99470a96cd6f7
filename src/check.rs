use crate::report::Failures;
use crate::{HttpApi, InfrastructureOutputs, LambdaApi, Outcome, Report, Scenario, TestContext};

/// Name of the sub-check verifying the function exists
pub const FUNCTION_EXISTS: &str = "lambda_function_exists";

/// Name of the invocation sub-check for `scenario`
pub const fn invocation_check_name(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::SourceFromFolder => "invoke_source_from_folder",
        Scenario::SourceFromZip => "invoke_source_from_zip",
    }
}

/// Verifies a deployed lambda function against its terraform outputs.
///
/// Every sub-check records its failures independently; a failing
/// sub-check never prevents the following ones from running.
#[derive(Debug, Clone)]
pub struct AcceptanceCheck<L, H> {
    lambda: L,
    http: H,
}

impl<L, H> AcceptanceCheck<L, H>
where
    L: LambdaApi,
    H: HttpApi,
{
    /// Creates a check using the given clients
    pub fn new(lambda: L, http: H) -> Self {
        Self { lambda, http }
    }

    /// Runs all sub-checks in order. Only a failure to read the
    /// terraform outputs is returned as error.
    pub async fn run<C: TestContext + ?Sized>(&self, ctx: &C) -> anyhow::Result<Report> {
        let outputs = InfrastructureOutputs::read(ctx)?;
        log::info!("Running acceptance checks for {}", outputs.function_arn);

        let mut report = Report::default();
        report.push(FUNCTION_EXISTS, self.function_exists(&outputs).await);
        for scenario in Scenario::ALL {
            let outcome = if ctx.enabled_for(scenario) {
                self.invoke(&outputs.function_url, scenario).await
            } else {
                Outcome::Skipped
            };
            report.push(invocation_check_name(scenario), outcome);
        }
        Ok(report)
    }

    async fn function_exists(&self, outputs: &InfrastructureOutputs) -> Outcome {
        let mut failures = Failures::default();
        match self.lambda.get_function(&outputs.function_name).await {
            Ok(function) => {
                failures.assert_eq(
                    &outputs.function_arn,
                    &function.function_arn,
                    "Expected ARN did not match actual ARN!",
                );
                failures.assert_eq(
                    &outputs.function_name,
                    &function.function_name,
                    "Expected Name did not match actual Name!",
                );
            }
            Err(err) => failures.error(format!("Failure during GetFunction: {:#}", err)),
        }
        failures.into_outcome()
    }

    async fn invoke(&self, function_url: &str, scenario: Scenario) -> Outcome {
        let mut failures = Failures::default();
        match self.http.get(function_url).await {
            Ok(body) => failures.assert_contains(
                &body,
                scenario.marker(),
                "Body did not contain expected response!",
            ),
            Err(err) => failures.error(format!("{:#}", err)),
        }
        failures.into_outcome()
    }
}
