//! acm-validator entry point
//!
//! `export` prints every `PENDING_VALIDATION` record of the account's ACM certificates as
//! a table; `import` reads such a table back and UPSERTs each record into the Route 53
//! hosted zone with the longest matching suffix, asking for confirmation first.
//!
//! Exit status is non-zero only when the run cannot start or its setup calls fail;
//! per-record failures are reported and the run still succeeds.

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    if cli.global.dry_run {
        tracing::info!("Dry-run mode: no record will be changed");
    }

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
