//! Actions and their shell command templates
//!
//! Each domain (git, pipenv, free-form) is a variant carrying its own typed
//! parameters. An action is rendered once into a [`CommandSpec`]; the engine
//! never looks at the action itself.

use clap::Subcommand;
use std::fmt;

use crate::core::CommandSpec;

/// Git operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GitAction {
    /// Fetch remotes
    Fetch,
    /// Pull remotes
    Pull,
    /// Push changes
    Push,
    /// Add changes
    Add {
        /// Files to add
        #[arg(required = true, value_name = "PATH")]
        files: Vec<String>,
    },
    /// Commit changes
    Commit {
        /// Commit message
        #[arg(required = true, value_name = "MESSAGE")]
        message: Vec<String>,
    },
    /// Checkout branch
    Checkout {
        /// Branch to checkout
        branch: String,
    },
    /// Restore files in the working tree
    Restore {
        /// Files to restore
        #[arg(required = true, value_name = "PATH")]
        files: Vec<String>,
    },
    /// Stash changes
    Stash,
    /// Apply last stash changes
    Unstash,
}

impl GitAction {
    pub fn name(&self) -> &'static str {
        match self {
            GitAction::Fetch => "fetch",
            GitAction::Pull => "pull",
            GitAction::Push => "push",
            GitAction::Add { .. } => "add",
            GitAction::Commit { .. } => "commit",
            GitAction::Checkout { .. } => "checkout",
            GitAction::Restore { .. } => "restore",
            GitAction::Stash => "stash",
            GitAction::Unstash => "unstash",
        }
    }

    fn render(&self) -> String {
        match self {
            GitAction::Fetch => "git fetch -j4 --all".to_string(),
            GitAction::Pull => "git pull -j4 --all".to_string(),
            GitAction::Push => "git push".to_string(),
            GitAction::Add { files } => format!("git add {}", files.join(" ")),
            GitAction::Commit { message } => format!("git commit -m \"{}\"", message.join(" ")),
            GitAction::Checkout { branch } => format!("git checkout {branch}"),
            GitAction::Restore { files } => format!("git restore {}", files.join(" ")),
            GitAction::Stash => "git stash".to_string(),
            GitAction::Unstash => "git stash pop".to_string(),
        }
    }
}

/// Pipenv virtual environment operations
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipenvAction {
    /// Get location of virtualenv
    Location,
    /// Lock dependencies
    Lock,
    /// Remove virtualenv
    Remove,
    /// Sync dependencies
    Sync,
    /// Update dependencies
    Update,
    /// Install dependencies
    Install,
}

impl PipenvAction {
    pub fn name(&self) -> &'static str {
        match self {
            PipenvAction::Location => "location",
            PipenvAction::Lock => "lock",
            PipenvAction::Remove => "remove",
            PipenvAction::Sync => "sync",
            PipenvAction::Update => "update",
            PipenvAction::Install => "install",
        }
    }

    fn render(&self) -> &'static str {
        match self {
            PipenvAction::Location => "pipenv --venv",
            PipenvAction::Lock => "pipenv lock",
            PipenvAction::Remove => "pipenv --rm",
            PipenvAction::Sync => "pipenv sync --dev",
            PipenvAction::Update => "pipenv update",
            PipenvAction::Install => "pipenv install --dev",
        }
    }
}

/// Free-form commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FreeAction {
    /// Run a free command
    Free {
        /// Command to run
        #[arg(value_name = "\"COMMAND\"")]
        command: String,
    },
}

/// One action selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Git(GitAction),
    Pipenv(PipenvAction),
    Cmd(FreeAction),
}

impl Action {
    pub fn domain(&self) -> &'static str {
        match self {
            Action::Git(_) => "git",
            Action::Pipenv(_) => "pipenv",
            Action::Cmd(_) => "cmd",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Git(action) => action.name(),
            Action::Pipenv(action) => action.name(),
            Action::Cmd(FreeAction::Free { .. }) => "free",
        }
    }

    /// Renders the action into the command run in every directory
    pub fn command_spec(&self) -> CommandSpec {
        match self {
            Action::Git(action) => CommandSpec::new(action.render()),
            Action::Pipenv(action) => CommandSpec::new(action.render()),
            Action::Cmd(FreeAction::Free { command }) => CommandSpec::new(command.clone()),
        }
    }
}

/// `domain > action > command`, used in notifications
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} > {} > {}",
            self.domain(),
            self.name(),
            self.command_spec()
        )
    }
}
