//! # `inventory` Entry Point
//!
//! ```text
//! $ inventory add --name "Клавиатура" --price 25.5 --quantity 3
//! Saved product #1: Клавиатура
//! $ inventory list
//! 1 found:
//! [1] Клавиатура | Price: 25.50 | Qty: 3
//! ```
//!
//! Exit status: 0 when a command ran, 1 without a command or on any error.

use clap::Parser;
use std::io;
use std::process::ExitCode;

use inventory_cli::cli::Cli;
use inventory_cli::{init_tracing, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let mut stdout = io::stdout().lock();
    let outcome = run(cli, &mut stdout).await?;

    Ok(outcome.exit_code())
}
