/// Example deployments of the lambda module. Exactly one of
/// them is active per run and gates the invocation checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Function code deployed from a source folder
    SourceFromFolder,
    /// Function code deployed from a prebuilt zip archive
    SourceFromZip,
}

impl Scenario {
    /// All known scenarios in check order
    pub const ALL: [Self; 2] = [Self::SourceFromFolder, Self::SourceFromZip];

    /// Name of the example directory backing this scenario
    pub const fn name(self) -> &'static str {
        match self {
            Self::SourceFromFolder => "source_from_folder",
            Self::SourceFromZip => "source_from_zip",
        }
    }

    /// Literal string the deployed function returns for this scenario
    pub const fn marker(self) -> &'static str {
        match self {
            Self::SourceFromFolder => "examples/source_from_folder",
            Self::SourceFromZip => "examples/source_from_zip",
        }
    }

    /// Infers the scenario from a terraform working directory,
    /// e.g. `examples/source_from_zip`. Existing directories are
    /// resolved first, so `.` and `..` map to their real names.
    pub fn from_dir(dir: &std::path::Path) -> Option<Self> {
        let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let name = resolved.file_name()?.to_str()?;
        name.parse().ok()
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown scenario: {}", s))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Scenario;
    use std::path::Path;

    #[test]
    fn parses_known_names() {
        assert_eq!(
            "source_from_folder".parse::<Scenario>().unwrap(),
            Scenario::SourceFromFolder
        );
        assert_eq!(
            "source_from_zip".parse::<Scenario>().unwrap(),
            Scenario::SourceFromZip
        );
        assert!("complete".parse::<Scenario>().is_err());
    }

    #[test]
    fn infers_from_directory() {
        assert_eq!(
            Scenario::from_dir(Path::new("examples/source_from_zip")),
            Some(Scenario::SourceFromZip)
        );
        assert_eq!(
            Scenario::from_dir(Path::new("/work/examples/source_from_folder/")),
            Some(Scenario::SourceFromFolder)
        );
        assert_eq!(Scenario::from_dir(Path::new("examples/complete")), None);
    }

    #[test]
    fn infers_from_relative_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("source_from_zip").join("nested");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            Scenario::from_dir(&nested.join("..")),
            Some(Scenario::SourceFromZip)
        );
        assert_eq!(
            Scenario::from_dir(&nested.join("..").join(".")),
            Some(Scenario::SourceFromZip)
        );
        assert_eq!(Scenario::from_dir(&nested), None);
    }

    #[test]
    fn markers_are_distinct() {
        assert!(!Scenario::SourceFromZip
            .marker()
            .contains(Scenario::SourceFromFolder.marker()));
        assert!(Scenario::SourceFromFolder
            .marker()
            .ends_with(Scenario::SourceFromFolder.name()));
    }
}
