//! Sift CLI entry point: argument parsing, logging setup and dispatch.

use clap::Parser;
use miette::Result;
use sift_cli::{cli, commands, error, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Shake(shake_args) => commands::shake_execute(shake_args).await,
        cli::Command::Init(init_args) => commands::init_execute(init_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
