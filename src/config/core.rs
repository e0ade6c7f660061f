use crate::io::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for cmdcov (`.cmdcov.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CmdcovConfig {
    /// Skip the whole run
    #[serde(default)]
    pub skip: Option<bool>,

    /// Target executable or jar
    #[serde(default)]
    pub artifact: Option<PathBuf>,

    /// Directory scanned for invocation strings
    #[serde(default)]
    pub source_root: Option<PathBuf>,

    /// Report destination
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub format: Option<ReportFormat>,

    /// Prefix stripped from aliases to form bare variants
    #[serde(default)]
    pub invocation_prefix: Option<String>,

    /// Fail the run when coverage falls below this percentage
    #[serde(default)]
    pub min_coverage: Option<f64>,

    /// List each gap's aliases in HTML and Markdown reports
    #[serde(default)]
    pub show_aliases: Option<bool>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub invocation: Option<InvocationConfig>,
}

/// How the command listing is obtained from the artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvocationConfig {
    /// `java` executable used for jar artifacts
    #[serde(default)]
    pub java: Option<PathBuf>,

    /// Arguments that make the artifact print its command CSV
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl CmdcovConfig {
    /// Anchor relative paths at `base`, normally the config file's directory.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.artifact = self.artifact.map(anchor);
        self.source_root = self.source_root.map(anchor);
        self.output = self.output.map(anchor);
        if let Some(invocation) = self.invocation.as_mut() {
            // Bare names such as `java` are looked up on PATH, not anchored
            invocation.java = invocation.java.take().map(|p| {
                if p.components().count() > 1 {
                    anchor(p)
                } else {
                    p
                }
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_full_config() {
        let config: CmdcovConfig = toml::from_str(indoc! {r#"
            artifact = "fcli-core/fcli-app/build/libs/fcli.jar"
            source_root = "fcli-other/fcli-functional-test/src"
            format = "markdown"
            min_coverage = 75.0
            show_aliases = true

            [invocation]
            java = "java"
            args = ["util", "all-commands", "ls", "-o", "csv=command,fullAliasesString"]
        "#})
        .unwrap();

        assert_eq!(config.format, Some(ReportFormat::Markdown));
        assert_eq!(config.min_coverage, Some(75.0));
        assert_eq!(config.invocation.unwrap().args.unwrap().len(), 5);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let parsed = toml::from_str::<CmdcovConfig>("artefact = \"typo\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_relative_paths_are_anchored() {
        let config = CmdcovConfig {
            artifact: Some(PathBuf::from("build/libs/fcli.jar")),
            output: Some(PathBuf::from("/abs/report.html")),
            invocation: Some(InvocationConfig {
                java: Some(PathBuf::from("java")),
                args: None,
            }),
            ..Default::default()
        }
        .resolve_relative_to(Path::new("/repo"));

        assert_eq!(config.artifact, Some(PathBuf::from("/repo/build/libs/fcli.jar")));
        assert_eq!(config.output, Some(PathBuf::from("/abs/report.html")));
        assert_eq!(config.invocation.unwrap().java, Some(PathBuf::from("java")));
    }
}
