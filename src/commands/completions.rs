//! Shell completion script generation

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

/// Writes the completion script for `shell`
pub fn handle_completions_command<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
    out.flush()?;
    Ok(())
}
