//! # `seed` Entry Point
//!
//! See [`inventory_cli::seed`] for options and generated data.

use clap::Parser;
use std::io;

use inventory_cli::init_tracing;
use inventory_cli::seed::{run_seed, SeedArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = SeedArgs::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    run_seed(args, &mut stdout).await?;

    Ok(())
}
