//! Configuration constants and settings

// Concurrency Configuration
//
// Every unit of work is dominated by waiting on an external process, so the
// pool is sized for I/O rather than CPU.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Pattern used when no filter is configured
pub const DEFAULT_FILTER: &str = "*";

/// Marker directory that identifies a repository
pub const VCS_MARKER: &str = ".git";

// Shell used to interpret command templates
#[cfg(not(windows))]
pub const SHELL_PROGRAM: &str = "sh";
#[cfg(not(windows))]
pub const SHELL_COMMAND_FLAG: &str = "-c";
#[cfg(windows)]
pub const SHELL_PROGRAM: &str = "cmd";
#[cfg(windows)]
pub const SHELL_COMMAND_FLAG: &str = "/C";

/// Exit code recorded when no real exit status exists
/// (killed by a signal, timed out, missing directory, spawn failure).
pub const SENTINEL_EXIT_CODE: i32 = -1;

/// Resolves the effective pool size, never below one
pub fn get_pool_size(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_POOL_SIZE).max(1)
}

// Progress bar configuration
pub const PROGRESS_TEMPLATE: &str = "{spinner} [{bar:30}] {pos}/{len} {wide_msg}";
pub const PROGRESS_CHARS: &str = "##-";

// UI Constants
pub const NO_TARGETS_MESSAGE: &str = "No matching directories found in current directory.";
pub const RULE_WIDTH: usize = 100;
