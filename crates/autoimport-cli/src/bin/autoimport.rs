#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use autoimport_cli::args::CliArgs;
use autoimport_cli::{driver, reporter};
use clap::Parser;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // AUTOIMPORT_LOG / AUTOIMPORT_LOG_FORMAT, see autoimport_core::tracing_config.
    autoimport_core::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let mut stdout = std::io::stdout().lock();
    let summary = driver::run(&args, &cwd, &mut stdout).await?;

    eprintln!("{}", reporter::format_summary(&summary, args.dry_run));

    Ok(ExitCode::from(if summary.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }))
}
