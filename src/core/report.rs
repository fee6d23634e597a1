//! Rendering of dispatch results

use std::io::{self, Write};
use std::time::Duration;

use super::config::RULE_WIDTH;
use super::result::{CommandSpec, ExecutionResult};
use crate::utils::Style;

/// Writes one block per result, in order
///
/// Successful results are skipped unless `verbose` is set. Each reported
/// block carries the status line, the directory banner, and the captured
/// stdout and stderr. Write errors are returned to the caller.
pub fn report<W: Write>(
    out: &mut W,
    results: &[ExecutionResult],
    command: &CommandSpec,
    verbose: bool,
    style: Style,
) -> io::Result<()> {
    for result in results {
        if result.success() && !verbose {
            continue;
        }

        let status = if result.success() {
            style.success("[SUCCESS]")
        } else {
            style.failure("[FAILED]")
        };

        writeln!(out, "{}", style.rule(RULE_WIDTH))?;
        writeln!(out, "{} {}", status, style.name(&result.name()))?;
        writeln!(out, "{}", style.code(&format!("$ {command}")))?;
        if !result.success() {
            writeln!(out, "{}: {}", style.label("Exit code"), result.exit_code)?;
        }
        writeln!(out, "{}: {}", style.label("Stdout"), result.stdout_lossy())?;
        writeln!(out, "{}: {}", style.label("Stderr"), result.stderr_lossy())?;
    }
    out.flush()
}

/// Pass/fail counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Display names of failed targets, in result order
    pub failed_names: Vec<String>,
}

impl RunSummary {
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            if result.success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
                summary.failed_names.push(result.name().into_owned());
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Generates the one-line completion summary
    pub fn generate_summary(&self, duration: Duration) -> String {
        let icon = if self.has_failures() { "🔴" } else { "✅" };
        format!(
            "{} Completed in {:.1}s • {} succeeded • {} failed",
            icon,
            duration.as_secs_f64(),
            self.succeeded,
            self.failed
        )
    }
}
