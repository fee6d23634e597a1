//! Listing of target directories

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::core::{resolve, NO_TARGETS_MESSAGE};
use crate::settings::RunConfiguration;

/// Prints every directory a command would run in, one per line
pub fn handle_list_command<W: Write>(
    config: &RunConfiguration,
    base_dir: &Path,
    out: &mut W,
) -> Result<()> {
    let targets = resolve(base_dir, &config.filter, config.repositories_only)?;

    if targets.is_empty() {
        writeln!(out, "{NO_TARGETS_MESSAGE}")?;
        return Ok(());
    }

    for target in &targets {
        writeln!(out, "{}", target.display())?;
    }
    Ok(())
}
