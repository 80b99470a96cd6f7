use crate::Scenario;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the terraform working directory
pub const ENV_TERRAFORM_DIR: &str = "LAMBDA_ACCEPTANCE_TERRAFORM_DIR";
/// Environment variable holding the terraform binary
pub const ENV_TERRAFORM_BINARY: &str = "LAMBDA_ACCEPTANCE_TERRAFORM_BINARY";
/// Environment variable holding the active scenario
pub const ENV_SCENARIO: &str = "LAMBDA_ACCEPTANCE_SCENARIO";
/// Environment variable holding the timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "LAMBDA_ACCEPTANCE_TIMEOUT_SECS";

/// Default timeout for outbound calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a single acceptance run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory in which terraform was applied
    pub terraform_dir: PathBuf,
    /// Binary used to read outputs, e.g. `terraform` or `tofu`
    pub terraform_binary: String,
    /// Active scenario. Inferred from `terraform_dir` if unset
    pub scenario: Option<Scenario>,
    /// Limit for every HTTP request and AWS operation
    pub timeout: Duration,
    /// Overrides the region of the credential chain
    pub aws_region: Option<String>,
    /// Overrides the AWS endpoint, e.g. for localstack
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Config for `terraform_dir` with every other setting at its default
    pub fn new(terraform_dir: impl Into<PathBuf>) -> Self {
        Self {
            terraform_dir: terraform_dir.into(),
            terraform_binary: "terraform".to_owned(),
            scenario: None,
            timeout: DEFAULT_TIMEOUT,
            aws_region: None,
            aws_endpoint_url: None,
        }
    }

    /// Reads the config from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the config using `lookup` to resolve variables.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        use anyhow::Context;

        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let terraform_dir = lookup(ENV_TERRAFORM_DIR)
            .with_context(|| format!("Missing {} env variable", ENV_TERRAFORM_DIR))?;
        let mut config = Self::new(terraform_dir);
        if let Some(binary) = lookup(ENV_TERRAFORM_BINARY) {
            config.terraform_binary = binary;
        }
        if let Some(scenario) = lookup(ENV_SCENARIO) {
            config.scenario = Some(
                scenario
                    .parse()
                    .with_context(|| format!("Invalid {} env variable", ENV_SCENARIO))?,
            );
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} env variable: {}", ENV_TIMEOUT_SECS, timeout))?;
            anyhow::ensure!(secs > 0, "{} must be greater than 0", ENV_TIMEOUT_SECS);
            config.timeout = Duration::from_secs(secs);
        }
        config.aws_region = lookup("AWS_REGION");
        config.aws_endpoint_url = lookup("AWS_ENDPOINT_URL");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[(ENV_TERRAFORM_DIR, "examples/source_from_zip")]).unwrap();
        assert_eq!(config, Config::new("examples/source_from_zip"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.terraform_binary, "terraform");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            (ENV_TERRAFORM_DIR, "examples/complete"),
            (ENV_TERRAFORM_BINARY, "tofu"),
            (ENV_SCENARIO, "source_from_folder"),
            (ENV_TIMEOUT_SECS, "5"),
            ("AWS_REGION", "eu-central-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
        ])
        .unwrap();
        assert_eq!(config.terraform_binary, "tofu");
        assert_eq!(config.scenario, Some(Scenario::SourceFromFolder));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.aws_region.as_deref(), Some("eu-central-1"));
        assert_eq!(
            config.aws_endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
    }

    #[test]
    fn invalid_values() {
        assert!(config(&[]).is_err());
        assert!(config(&[(ENV_TERRAFORM_DIR, " ")]).is_err());
        assert!(config(&[(ENV_TERRAFORM_DIR, "x"), (ENV_SCENARIO, "complete")]).is_err());
        assert!(config(&[(ENV_TERRAFORM_DIR, "x"), (ENV_TIMEOUT_SECS, "soon")]).is_err());
        assert!(config(&[(ENV_TERRAFORM_DIR, "x"), (ENV_TIMEOUT_SECS, "0")]).is_err());
    }
}
