//! Test fixtures and builders

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A base directory full of sibling directories, removed on drop
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    /// Canonical path of the base directory
    pub fn path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize workspace path")
    }

    /// Canonical path of one child directory
    pub fn child(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Write a file inside a child directory
    pub fn write(&self, dir: &str, file: &str, content: &str) -> Result<()> {
        fs::write(self.temp_dir.path().join(dir).join(file), content)?;
        Ok(())
    }

    pub fn read(&self, dir: &str, file: &str) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join(dir).join(file)).ok()
    }
}

/// Builder for creating test workspaces with various configurations
pub struct TestWorkspaceBuilder {
    repositories: Vec<String>,
    plain_dirs: Vec<String>,
    files: Vec<(String, String, String)>,
    config: Option<String>,
}

impl TestWorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            plain_dirs: Vec::new(),
            files: Vec::new(),
            config: None,
        }
    }

    /// Add a directory with a `.git` marker
    pub fn with_repo(mut self, name: &str) -> Self {
        self.repositories.push(name.to_string());
        self
    }

    /// Add a directory without a `.git` marker
    pub fn with_dir(mut self, name: &str) -> Self {
        self.plain_dirs.push(name.to_string());
        self
    }

    /// Add a file inside one of the directories
    pub fn with_file(mut self, dir: &str, file: &str, content: &str) -> Self {
        self.files
            .push((dir.to_string(), file.to_string(), content.to_string()));
        self
    }

    /// Write `.mrh.json` in the base directory
    pub fn with_config(mut self, json: &str) -> Self {
        self.config = Some(json.to_string());
        self
    }

    pub fn build(self) -> Result<TestWorkspace> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        for name in &self.repositories {
            fs::create_dir_all(root.join(name).join(".git"))?;
        }
        for name in &self.plain_dirs {
            fs::create_dir_all(root.join(name))?;
        }
        for (dir, file, content) in &self.files {
            fs::write(root.join(dir).join(file), content)?;
        }
        if let Some(config) = &self.config {
            fs::write(root.join(".mrh.json"), config)?;
        }

        Ok(TestWorkspace { temp_dir })
    }
}

impl Default for TestWorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of the given paths, for compact assertions
pub fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
