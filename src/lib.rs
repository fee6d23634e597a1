//! # mrh
//!
//! `mrh` (multi repo helper) runs one shell command in every matching
//! subdirectory of the current directory, in parallel, and reports which
//! directories succeeded and which failed. It powers the `mrh` CLI tool.
//!
//! ## Core Features
//!
//! - **Directory Filtering**: Glob patterns select immediate subdirectories, optionally only repositories.
//! - **Bounded Fan-Out**: Commands run concurrently under a fixed-size worker pool.
//! - **Isolated Working Directories**: Every child process gets its own working directory; the process cwd is never changed.
//! - **Ordered Reporting**: Results come back in target order no matter which command finishes first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mrh::core::{dispatch, resolve, CommandSpec, DispatchOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let targets = resolve(".", &["*"], true)?;
//!     let command = Arc::new(CommandSpec::from("git fetch -j4 --all"));
//!     for result in dispatch(command, &targets, &DispatchOptions::default()).await? {
//!         println!("{}: {}", result.name(), result.exit_code);
//!     }
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod notify;
pub mod settings;
pub mod utils;

pub use error::{MrhError, Result};
