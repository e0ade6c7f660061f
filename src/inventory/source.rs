//! Sources of the raw command listing.
//!
//! `ProcessCommandSource` runs the real target binary; `StaticCommandSource`
//! replays captured output so the pipeline can be exercised without one.

use crate::core::{CoverageError, Result};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Arguments asking the target tool for its runnable, non-hidden commands as CSV.
pub const DEFAULT_LIST_ARGS: &[&str] = &[
    "util",
    "all-commands",
    "ls",
    "-q",
    "runnable && !hidden",
    "-o",
    "csv=command,fullAliasesString",
];

/// Something that can produce the CSV command listing.
pub trait CommandSource {
    /// Return the captured standard output of the listing.
    fn list_commands(&self) -> Result<String>;

    /// Human-readable description for log messages.
    fn describe(&self) -> String;
}

/// Runs the target artifact as a child process.
#[derive(Debug, Clone)]
pub struct ProcessCommandSource {
    artifact: PathBuf,
    java: Option<PathBuf>,
    args: Vec<String>,
}

impl ProcessCommandSource {
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            java: None,
            args: DEFAULT_LIST_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Use an explicit `java` executable for jar artifacts instead of `PATH`.
    pub fn with_java(mut self, java: Option<PathBuf>) -> Self {
        self.java = java;
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    fn is_jar(&self) -> bool {
        self.artifact
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
    }

    /// Build the program and argument vector without running anything
    pub fn command_line(&self) -> Result<(PathBuf, Vec<String>)> {
        verify_artifact(&self.artifact, self.is_jar())?;

        if self.is_jar() {
            let java = match &self.java {
                Some(java) => java.clone(),
                None => which::which("java").map_err(|e| {
                    CoverageError::config(format!(
                        "java is required to run {} but was not found on PATH: {}",
                        self.artifact.display(),
                        e
                    ))
                })?,
            };
            let mut args = vec![
                "-jar".to_string(),
                self.artifact.to_string_lossy().into_owned(),
            ];
            args.extend(self.args.iter().cloned());
            Ok((java, args))
        } else {
            Ok((self.artifact.clone(), self.args.clone()))
        }
    }
}

impl CommandSource for ProcessCommandSource {
    fn list_commands(&self) -> Result<String> {
        let (program, args) = self.command_line()?;
        let program_name = program.display().to_string();
        info!(program = %program_name, ?args, "Listing runnable commands");

        let output = Command::new(&program)
            .args(&args)
            .output()
            .map_err(|source| CoverageError::Launch {
                program: program_name.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(CoverageError::Invocation {
                program: program_name,
                status: output.status.to_string(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!(stderr = %stderr, "Command listing wrote to stderr");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self) -> String {
        format!("process:{}", self.artifact.display())
    }
}

/// Check that the artifact exists and, for native executables, can be run.
pub fn verify_artifact(path: &Path, is_jar: bool) -> Result<()> {
    if !path.is_file() {
        return Err(CoverageError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }
    if !is_jar && !is_executable(path)? {
        return Err(CoverageError::ArtifactNotExecutable {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;
    Ok(std::fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> Result<bool> {
    Ok(true)
}

/// Replays fixed listing output and counts how often it was asked for.
#[derive(Debug, Default)]
pub struct StaticCommandSource {
    output: String,
    calls: Cell<usize>,
}

impl StaticCommandSource {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CommandSource for StaticCommandSource {
    fn list_commands(&self) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.output.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
