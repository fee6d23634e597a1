//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::actions::{Action, FreeAction, GitAction, PipenvAction};
use crate::commands;
use crate::settings::{load_configuration, ConfigLocation, Overrides};
use crate::utils::Style;

/// Multi repo helper - run one command in every repository of the current directory
#[derive(Parser, Debug)]
#[command(name = "mrh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file to use [default: ./.mrh.json]
    #[arg(short = 'c', long = "cfg", alias = "config", global = true, value_name = "PATH")]
    pub cfg: Option<PathBuf>,

    /// Filter directories with glob patterns; repeat the flag or separate patterns with commas.
    /// Quote wildcards ("*") so the shell leaves them alone
    #[arg(long, global = true, action = ArgAction::Append, value_delimiter = ',', value_name = "PATTERN")]
    pub filter: Option<Vec<String>>,

    /// Print output of successful directories too
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Maximum number of commands running at once [default: 10]
    #[arg(short = 'j', long, global = true, value_name = "N", value_parser = parse_pool_size)]
    pub pool_size: Option<usize>,

    /// Run on all directories, even if they are not a git repository
    #[arg(long, global = true)]
    pub all: bool,

    /// Do not send a desktop notification when done
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Kill commands running longer than this many seconds
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

fn parse_pool_size(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("pool size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl GlobalArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            filter: self.filter.clone(),
            verbose: self.verbose,
            pool_size: self.pool_size,
            no_notify: self.no_notify,
            all: self.all,
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a git command in each repository
    #[command(subcommand)]
    Git(GitAction),

    /// Run a pipenv command in each repository
    #[command(subcommand)]
    Pipenv(PipenvAction),

    /// Run a free text command in each repository
    #[command(subcommand)]
    Cmd(FreeAction),

    /// List the directories commands would run in
    List,

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// The action to fan out, if this subcommand runs one
    pub fn action(&self) -> Option<Action> {
        match self {
            Commands::Git(action) => Some(Action::Git(action.clone())),
            Commands::Pipenv(action) => Some(Action::Pipenv(*action)),
            Commands::Cmd(action) => Some(Action::Cmd(action.clone())),
            Commands::List | Commands::Completions { .. } => None,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    ///
    /// Returns exit code 1 when any directory failed. Configuration and other
    /// fatal errors are returned as `Err`.
    pub async fn execute(self) -> Result<ExitCode> {
        if let Commands::Completions { shell } = self.command {
            commands::completions::handle_completions_command(shell, &mut io::stdout())?;
            return Ok(ExitCode::SUCCESS);
        }

        let cwd = std::env::current_dir()?;
        let location = ConfigLocation::from_cli(self.global.cfg.clone(), &cwd);
        let config = load_configuration(&location)?.with_overrides(&self.global.overrides());

        match self.command.action() {
            Some(action) => {
                let summary = commands::run::handle_run_command(
                    &action,
                    &config,
                    &cwd,
                    &mut io::stdout(),
                    Style::detect(),
                )
                .await?;
                Ok(if summary.has_failures() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                })
            }
            None => {
                commands::list::handle_list_command(&config, &cwd, &mut io::stdout())?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
