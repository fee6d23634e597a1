//! Per-invocation working directory
//!
//! The process-wide current directory is never changed. A [`ScopedDir`] is
//! validated once on entry and then handed to each spawned child as its own
//! working directory, so concurrent workers cannot observe each other's
//! directory and there is nothing to restore on any exit path.

use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::error::{MrhError, Result};

/// A target directory validated for one command execution
#[derive(Debug, Clone)]
pub struct ScopedDir {
    path: PathBuf,
}

impl ScopedDir {
    /// Validates the target, failing with `DirectoryNotFound` if it is missing or not a directory
    pub fn enter(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(MrhError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Points a child process at this directory
    pub fn apply<'c>(&self, command: &'c mut Command) -> &'c mut Command {
        command.current_dir(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_enter_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = ScopedDir::enter(&missing).unwrap_err();
        assert!(matches!(err, MrhError::DirectoryNotFound { path } if path == missing));
    }

    #[test]
    fn test_enter_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            ScopedDir::enter(&file),
            Err(MrhError::DirectoryNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_child_runs_in_scope_and_process_cwd_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().canonicalize().unwrap();
        let before = std::env::current_dir().unwrap();

        let scope = ScopedDir::enter(&target).unwrap();
        let mut command = Command::new("pwd");
        let output = scope.apply(&mut command).output().await.unwrap();

        let reported = String::from_utf8_lossy(&output.stdout).trim().to_string();
        assert_eq!(Path::new(&reported).canonicalize().unwrap(), target);
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
