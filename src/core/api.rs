//! Public API for the core module.
//!
//! This module provides the stable public API of the fan-out engine:
//! - Target directory filtering
//! - Per-directory command invocation
//! - Bounded concurrent dispatch
//! - Result reporting

// Core types
pub use super::result::{CommandSpec, ExecutionResult};
pub use super::workdir::ScopedDir;

// Engine stages
pub use super::dispatch::{dispatch, DispatchOptions};
pub use super::filter::{is_repository, resolve};
pub use super::invoker::run;
pub use super::report::{report, RunSummary};

// Configuration
pub use super::config::{get_pool_size, DEFAULT_FILTER, DEFAULT_POOL_SIZE, SENTINEL_EXIT_CODE};

// User-facing messages
pub use super::config::NO_TARGETS_MESSAGE;
