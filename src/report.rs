/// Result of a single sub-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All assertions held
    Passed,
    /// At least one assertion or call failed. Contains every failure message.
    Failed(Vec<String>),
    /// Not applicable to the active scenario
    Skipped,
}

/// Named outcome of a sub-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Name of the sub-check
    pub name: &'static str,
    /// Its outcome
    pub outcome: Outcome,
}

/// Outcomes of all sub-checks in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    checks: Vec<CheckReport>,
}

impl Report {
    pub(crate) fn push(&mut self, name: &'static str, outcome: Outcome) {
        match &outcome {
            Outcome::Passed => log::info!("{}: passed", name),
            Outcome::Skipped => log::info!("{}: skipped", name),
            Outcome::Failed(failures) => log::error!("{}: {} failure(s)", name, failures.len()),
        }
        self.checks.push(CheckReport { name, outcome });
    }

    /// All sub-check reports
    pub fn checks(&self) -> &[CheckReport] {
        &self.checks
    }

    /// Outcome of the sub-check called `name`
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.checks
            .iter()
            .find(|check| check.name == name)
            .map(|check| &check.outcome)
    }

    /// Whether no sub-check failed. Skipped checks count as neither.
    pub fn is_success(&self) -> bool {
        !self
            .checks
            .iter()
            .any(|check| matches!(check.outcome, Outcome::Failed(_)))
    }

    /// Converts failures into a single error listing every failed sub-check
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Acceptance checks failed:\n{}", self))
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for check in &self.checks {
            match &check.outcome {
                Outcome::Passed => writeln!(f, "PASS {}", check.name)?,
                Outcome::Skipped => writeln!(f, "SKIP {}", check.name)?,
                Outcome::Failed(failures) => {
                    writeln!(f, "FAIL {}", check.name)?;
                    for failure in failures {
                        writeln!(f, "    {}", failure)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Longest prefix of a response body quoted in a failure message
const MAX_QUOTED_CHARS: usize = 512;

/// Collects non-fatal failures of one sub-check, similar to
/// assertions which record an error but continue execution.
#[derive(Debug, Default)]
pub(crate) struct Failures {
    messages: Vec<String>,
}

impl Failures {
    pub(crate) fn error(&mut self, message: String) {
        log::error!("{}", message);
        self.messages.push(message);
    }

    pub(crate) fn assert_eq(&mut self, expected: &str, actual: &str, message: &str) {
        if expected != actual {
            self.error(format!(
                "{}\n        expected: {:?}\n        actual:   {:?}",
                message, expected, actual
            ));
        }
    }

    pub(crate) fn assert_contains(&mut self, haystack: &str, needle: &str, message: &str) {
        if !haystack.contains(needle) {
            let quoted = match haystack.char_indices().nth(MAX_QUOTED_CHARS) {
                Some((end, _)) => format!(
                    "{:?}... ({} bytes total)",
                    &haystack[..end],
                    haystack.len()
                ),
                None => format!("{:?}", haystack),
            };
            self.error(format!(
                "{}\n        {} does not contain {:?}",
                message, quoted, needle
            ));
        }
    }

    pub(crate) fn into_outcome(self) -> Outcome {
        if self.messages.is_empty() {
            Outcome::Passed
        } else {
            Outcome::Failed(self.messages)
        }
    }
}
