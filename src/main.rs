//! mrh: run one command across many sibling repositories

use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

use mrh::cli::Cli;

/// Environment variable holding the log filter
const LOG_ENV: &str = "MRH_LOG";

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.global.verbose);

    match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
