//! Fan-out command implementation
//!
//! This module handles the main flow - resolving target directories, running
//! the action's command in all of them, and reporting what happened.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::actions::Action;
use crate::core::{dispatch, report, resolve, DispatchOptions, RunSummary, NO_TARGETS_MESSAGE};
use crate::notify::notify;
use crate::settings::RunConfiguration;
use crate::utils::{set_terminal_title, set_terminal_title_and_flush, Style};

const RUNNING_TITLE: &str = "🚀 mrh";
const DONE_TITLE: &str = "✅ mrh";

// Verbose runs log every command on stderr, where the bar would be drawn
fn dispatch_options(config: &RunConfiguration) -> DispatchOptions {
    DispatchOptions {
        pool_size: config.pool_size,
        timeout: config.timeout,
        show_progress: !config.verbose,
    }
}

/// Handles one action across every target directory under `base_dir`
///
/// Per-directory failures end up in the returned summary; only problems with
/// the run itself (bad filter, broken worker pool, unwritable output) are errors.
pub async fn handle_run_command<W: Write>(
    action: &Action,
    config: &RunConfiguration,
    base_dir: &Path,
    out: &mut W,
    style: Style,
) -> Result<RunSummary> {
    set_terminal_title(RUNNING_TITLE);

    let targets = match resolve(base_dir, &config.filter, config.repositories_only) {
        Ok(targets) => targets,
        Err(e) => {
            set_terminal_title_and_flush(DONE_TITLE);
            return Err(e.into());
        }
    };

    if targets.is_empty() {
        writeln!(out, "{NO_TARGETS_MESSAGE}")?;
        set_terminal_title_and_flush(DONE_TITLE);
        return Ok(RunSummary::default());
    }

    let command = Arc::new(action.command_spec());
    let target_word = if config.repositories_only {
        if targets.len() == 1 { "repository" } else { "repositories" }
    } else if targets.len() == 1 {
        "directory"
    } else {
        "directories"
    };
    writeln!(
        out,
        "Running {} in {} {}...",
        style.code(command.as_str()),
        targets.len(),
        target_word
    )?;
    out.flush()?;

    let start_time = Instant::now();
    let results = match dispatch(Arc::clone(&command), &targets, &dispatch_options(config)).await {
        Ok(results) => results,
        Err(e) => {
            set_terminal_title_and_flush(DONE_TITLE);
            return Err(e.into());
        }
    };

    report(out, &results, &command, config.verbose, style)?;
    let summary = RunSummary::from_results(&results);
    writeln!(out, "{}", summary.generate_summary(start_time.elapsed()))?;
    out.flush()?;

    if config.notify {
        notify(action, &summary).await;
    }

    set_terminal_title_and_flush(DONE_TITLE);
    Ok(summary)
}
