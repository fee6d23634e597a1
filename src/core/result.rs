//! Command text and per-directory outcome types

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use super::config::SENTINEL_EXIT_CODE;
use crate::error::MrhError;

/// A fully rendered shell command, run identically in every target directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec(String);

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommandSpec {
    fn from(command: &str) -> Self {
        Self::new(command)
    }
}

impl From<String> for CommandSpec {
    fn from(command: String) -> Self {
        Self(command)
    }
}

/// Outcome of running one [`CommandSpec`] in one target directory
///
/// Output is kept as raw bytes and only decoded when displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub directory: PathBuf,
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    /// Builds a failed result carrying a descriptive message instead of process output
    pub fn failed(directory: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        let mut stderr = message.into().into_bytes();
        stderr.push(b'\n');
        Self {
            directory: directory.into(),
            exit_code: SENTINEL_EXIT_CODE,
            stdout: Vec::new(),
            stderr,
        }
    }

    /// Contains an engine error to the one target it happened in
    pub fn from_error(directory: impl Into<PathBuf>, error: &MrhError) -> Self {
        Self::failed(directory, error.to_string())
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Last path component of the target, used as its display name
    pub fn name(&self) -> Cow<'_, str> {
        directory_name(&self.directory)
    }

    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// Display name of a directory, falling back to the full path
pub fn directory_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
