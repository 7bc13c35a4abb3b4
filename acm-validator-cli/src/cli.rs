//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// acm-validator: publish ACM DNS validation records into Route 53
#[derive(Parser, Debug)]
#[command(name = "acm-validator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Named profile of the shared credentials file
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// ACM region
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Log intended changes without prompting or writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Accept every change without prompting
    #[arg(short = 'y', long = "yes", global = true)]
    pub assume_yes: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write every pending validation record as a table
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Publish the records of a table into their hosted zones
    Import {
        /// Table produced by `export`
        file: PathBuf,
    },
}
