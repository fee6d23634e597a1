//! Run configuration and the `.mrh.json` reader
//!
//! Values are layered: built-in defaults, then the JSON file, then flags
//! given on the command line.

use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{DEFAULT_FILTER, DEFAULT_POOL_SIZE};
use crate::error::{MrhError, Result};

/// Config file looked up in the current directory when `--cfg` is not given
pub const CONFIG_FILE_NAME: &str = ".mrh.json";

/// Settings for one program run, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Glob patterns selecting target directories
    pub filter: Vec<String>,
    pub verbose: bool,
    /// Maximum number of concurrent commands, at least one
    pub pool_size: usize,
    /// Send a desktop notification when the run completes
    pub notify: bool,
    /// Only operate on directories that are repositories
    pub repositories_only: bool,
    /// Per-command time limit; none by default
    pub timeout: Option<Duration>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            filter: vec![DEFAULT_FILTER.to_string()],
            verbose: false,
            pool_size: DEFAULT_POOL_SIZE,
            notify: true,
            repositories_only: true,
            timeout: None,
        }
    }
}

/// On-disk shape of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    filter: Option<Vec<String>>,
    verbose: Option<bool>,
    no_notify: Option<bool>,
    pool_size: Option<usize>,
    all: Option<bool>,
    timeout_secs: Option<u64>,
}

/// Values given on the command line; `None`/`false` leaves the lower layer alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub filter: Option<Vec<String>>,
    pub verbose: bool,
    pub pool_size: Option<usize>,
    pub no_notify: bool,
    pub all: bool,
    pub timeout_secs: Option<u64>,
}

fn config_error(path: &Path, message: impl Into<String>) -> MrhError {
    MrhError::Configuration {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Where the configuration comes from
#[derive(Debug, Clone)]
pub enum ConfigLocation {
    /// `.mrh.json` in the working directory; optional
    Default(PathBuf),
    /// Path given with `--cfg`; must exist
    Explicit(PathBuf),
}

impl ConfigLocation {
    pub fn from_cli(explicit: Option<PathBuf>, cwd: &Path) -> Self {
        match explicit {
            Some(path) => ConfigLocation::Explicit(path),
            None => ConfigLocation::Default(cwd.join(CONFIG_FILE_NAME)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Default(path) | ConfigLocation::Explicit(path) => path,
        }
    }
}

/// Reads a config file and returns a RunConfiguration
pub fn load_configuration(location: &ConfigLocation) -> Result<RunConfiguration> {
    let path = location.path();

    if !path.is_file() {
        return match location {
            ConfigLocation::Explicit(_) => Err(config_error(path, "file not found")),
            ConfigLocation::Default(_) => {
                debug!("Config file {} not found, using defaults", path.display());
                Ok(RunConfiguration::default())
            }
        };
    }

    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        warn!("Config file {} is empty", path.display());
        return Ok(RunConfiguration::default());
    }

    debug!("Reading config file {}", path.display());
    let file: ConfigFile =
        serde_json::from_str(&text).map_err(|e| config_error(path, e.to_string()))?;
    RunConfiguration::default().merge_file(file, path)
}

impl RunConfiguration {
    fn merge_file(mut self, file: ConfigFile, path: &Path) -> Result<Self> {
        if let Some(filter) = file.filter {
            self.set_filter(filter);
        }
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
        if let Some(no_notify) = file.no_notify {
            self.notify = !no_notify;
        }
        if let Some(pool_size) = file.pool_size {
            if pool_size == 0 {
                return Err(config_error(path, "pool_size must be a positive integer"));
            }
            self.pool_size = pool_size;
        }
        if let Some(all) = file.all {
            self.repositories_only = !all;
        }
        if let Some(secs) = file.timeout_secs {
            if secs == 0 {
                return Err(config_error(path, "timeout_secs must be a positive integer"));
            }
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Applies command-line flags on top of the loaded configuration
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(filter) = &overrides.filter {
            self.set_filter(filter.clone());
        }
        self.verbose |= overrides.verbose;
        if let Some(pool_size) = overrides.pool_size {
            self.pool_size = pool_size.max(1);
        }
        if overrides.no_notify {
            self.notify = false;
        }
        if overrides.all {
            self.repositories_only = false;
        }
        if let Some(secs) = overrides.timeout_secs.filter(|secs| *secs > 0) {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    // An empty list means "no restriction", not "no targets"
    fn set_filter(&mut self, filter: Vec<String>) {
        self.filter = if filter.is_empty() {
            vec![DEFAULT_FILTER.to_string()]
        } else {
            filter
        };
    }
}
