//! Runs one command in one target directory

use log::{debug, info};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::config::{SENTINEL_EXIT_CODE, SHELL_COMMAND_FLAG, SHELL_PROGRAM};
use super::result::{directory_name, CommandSpec, ExecutionResult};
use super::workdir::ScopedDir;
use crate::error::{MrhError, Result};

/// Interpreter used to run command templates
#[derive(Debug, Clone, Copy)]
pub(crate) struct Shell {
    pub program: &'static str,
    pub flag: &'static str,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            program: SHELL_PROGRAM,
            flag: SHELL_COMMAND_FLAG,
        }
    }
}

/// Runs `command` through the shell inside `target` and captures its output
///
/// A nonzero exit is returned as a normal result. Errors are reserved for a
/// missing target directory and a shell that cannot be started. With a
/// timeout, a command that overruns is killed and reported with the sentinel
/// exit code.
pub async fn run(
    target: &Path,
    command: &CommandSpec,
    timeout: Option<Duration>,
) -> Result<ExecutionResult> {
    run_with_shell(Shell::default(), target, command, timeout).await
}

pub(crate) async fn run_with_shell(
    shell: Shell,
    target: &Path,
    command: &CommandSpec,
    timeout: Option<Duration>,
) -> Result<ExecutionResult> {
    let scope = ScopedDir::enter(target)?;
    info!("Running on {}: $ {}", directory_name(target), command);

    let mut process = Command::new(shell.program);
    process
        .arg(shell.flag)
        .arg(command.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    scope.apply(&mut process);

    let child = process.spawn().map_err(|source| MrhError::Spawn {
        path: target.to_path_buf(),
        source,
    })?;

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                // Dropping the child on timeout kills it
                return Ok(ExecutionResult::failed(
                    target,
                    format!("Command timed out after {limit:?}"),
                ));
            }
        },
        None => child.wait_with_output().await?,
    };

    let mut stderr = output.stderr;
    let exit_code = match output.status.code() {
        Some(code) => code,
        None => {
            stderr.extend_from_slice(format!("process {}\n", output.status).as_bytes());
            SENTINEL_EXIT_CODE
        }
    };
    debug!("{} exited with {}", directory_name(target), exit_code);

    Ok(ExecutionResult {
        directory: target.to_path_buf(),
        exit_code,
        stdout: output.stdout,
        stderr,
    })
}
