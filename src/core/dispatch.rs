//! Bounded fan-out of one command across many target directories
//!
//! Every target gets its own task; a semaphore caps how many of them run a
//! child process at once. Results are collected from the task handles in
//! submission order, so the returned list lines up index-for-index with the
//! input regardless of which command finished first.

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use super::config::{get_pool_size, PROGRESS_CHARS, PROGRESS_TEMPLATE};
use super::invoker;
use super::result::{directory_name, CommandSpec, ExecutionResult};
use crate::error::{MrhError, Result};

/// Knobs for one dispatch
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Maximum number of commands running at the same time
    pub pool_size: usize,
    /// Per-command limit; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Draw a progress bar on stderr (hidden anyway when stderr is not a terminal)
    pub show_progress: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            pool_size: get_pool_size(None),
            timeout: None,
            show_progress: false,
        }
    }
}

/// Creates the progress bar tracking completed targets
fn create_progress_bar(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .map(|style| style.progress_chars(PROGRESS_CHARS))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Runs `command` in every target with at most `pool_size` running concurrently
///
/// Waits for every target before returning. A failing target never cancels
/// its siblings: spawn problems, missing directories and even a panicked
/// worker are folded into that target's result. Only a broken worker pool
/// aborts the whole batch.
pub async fn dispatch(
    command: Arc<CommandSpec>,
    targets: &[PathBuf],
    options: &DispatchOptions,
) -> Result<Vec<ExecutionResult>> {
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let pool_size = get_pool_size(Some(options.pool_size));
    debug!(
        "Dispatching to {} targets with pool size {}",
        targets.len(),
        pool_size
    );
    let semaphore = Arc::new(Semaphore::new(pool_size));
    let progress = create_progress_bar(targets.len(), options.show_progress);

    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let semaphore = Arc::clone(&semaphore);
        let command = Arc::clone(&command);
        let target = target.clone();
        let progress = progress.clone();
        let timeout = options.timeout;

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            progress.set_message(directory_name(&target).into_owned());

            let result = match invoker::run(&target, &command, timeout).await {
                Ok(result) => result,
                Err(e) => {
                    warn!("{e}");
                    ExecutionResult::from_error(&target, &e)
                }
            };

            progress.inc(1);
            Ok::<_, tokio::sync::AcquireError>(result)
        }));
    }

    let outcomes = join_all(handles).await;
    progress.finish_and_clear();

    let mut results = Vec::with_capacity(targets.len());
    for (target, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Ok(Ok(result)) => results.push(result),
            Ok(Err(e)) => {
                return Err(MrhError::WorkerPool {
                    message: e.to_string(),
                })
            }
            Err(join_error) => {
                warn!("Worker for {} failed: {join_error}", target.display());
                results.push(ExecutionResult::failed(
                    target,
                    format!("Worker failed: {join_error}"),
                ));
            }
        }
    }

    Ok(results)
}
