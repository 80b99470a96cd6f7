use crate::Scenario;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of deployed infrastructure state and of the
/// currently active [`Scenario`].
pub trait TestContext {
    /// Returns the string value of the terraform output `key`
    fn terraform_output(&self, key: &str) -> anyhow::Result<String>;

    /// Scenario the infrastructure was deployed for, if any
    fn active_scenario(&self) -> Option<Scenario>;

    /// Whether checks gated on `scenario` should run
    fn enabled_for(&self, scenario: Scenario) -> bool {
        self.active_scenario() == Some(scenario)
    }
}

/// Single entry of `terraform output -json`
#[derive(Debug, Clone, serde::Deserialize)]
struct OutputValue {
    #[serde(default)]
    sensitive: bool,
    value: serde_json::Value,
}

/// [`TestContext`] backed by an applied terraform working directory.
///
/// Outputs are fetched once with `terraform output -json` and kept
/// for the lifetime of the context.
#[derive(Debug, Clone)]
pub struct TerraformContext {
    dir: PathBuf,
    scenario: Option<Scenario>,
    outputs: HashMap<String, OutputValue>,
}

impl TerraformContext {
    /// Runs `<binary> output -json` inside `dir` and caches the result.
    /// If `scenario` is `None`, it is inferred from the directory name.
    pub fn load(dir: &Path, binary: &str, scenario: Option<Scenario>) -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::process::Command;

        let resolved = dir
            .canonicalize()
            .with_context(|| format!("Unable to resolve terraform dir {}", dir.display()))?;
        let dir = resolved.as_path();
        log::info!("Reading terraform outputs in {}", dir.display());
        let output = Command::new(binary)
            .arg("output")
            .arg("-no-color")
            .arg("-json")
            .current_dir(dir)
            .output()
            .with_context(|| format!("Unable to execute {} in {}", binary, dir.display()))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} output failed with {}: {}",
                binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        let json = String::from_utf8(output.stdout)
            .with_context(|| format!("{} output returned invalid utf-8", binary))?;
        Self::from_json(dir, &json, scenario)
    }

    /// Builds a context from already captured `terraform output -json` text
    pub fn from_json(dir: &Path, json: &str, scenario: Option<Scenario>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let outputs: HashMap<String, OutputValue> =
            serde_json::from_str(json).context("Unable to parse terraform outputs")?;
        let scenario = scenario.or_else(|| Scenario::from_dir(dir));
        match scenario {
            Some(scenario) => log::info!("Active scenario: {}", scenario),
            None => log::warn!(
                "No scenario matches {}, invocation checks will be skipped",
                dir.display()
            ),
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            scenario,
            outputs,
        })
    }

    /// Terraform working directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TestContext for TerraformContext {
    fn terraform_output(&self, key: &str) -> anyhow::Result<String> {
        let output = self.outputs.get(key).ok_or_else(|| {
            anyhow::anyhow!("Output {} is not defined in {}", key, self.dir.display())
        })?;
        if output.sensitive {
            log::debug!("Output {} = [sensitive]", key);
        } else {
            log::debug!("Output {} = {}", key, output.value);
        }
        match &output.value {
            serde_json::Value::String(value) => Ok(value.clone()),
            other => anyhow::bail!("Output {} is not a string: {}", key, other),
        }
    }

    fn active_scenario(&self) -> Option<Scenario> {
        self.scenario
    }
}
