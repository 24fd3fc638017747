//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging, loads `.env` files and hands
//! the command to the router. Errors are reported on stderr and mapped to
//! the process exit code.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use pocketknife_cli::{Cli, StdinConfirmation, load_env, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Parse failures are usage errors
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);
    load_env();

    match run(cli.command, &StdinConfirmation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            ExitCode::from(err.exit_code())
        }
    }
}
