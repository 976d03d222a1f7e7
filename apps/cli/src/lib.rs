//! # inventory-cli
//!
//! Library half of the `inventory` and `seed` binaries.
//!
//! ## Module Organization
//! ```text
//! inventory_cli/
//! ├── lib.rs          ◄─── You are here (logging + run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── CliConfig, OutputFormat
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   └── product.rs  ◄─── list/add/get/update/delete/search handlers
//! ├── output.rs       ◄─── Text / JSON rendering
//! ├── seed.rs         ◄─── Random demo products
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Run Sequence
//! ```text
//! parse args ─► init tracing ─► open Database ─► run command ─► close Database
//!                                                     │               ▲
//!                                                     └── error ──────┘
//!                                     (the connection is closed on both paths)
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod seed;

use anyhow::Context;
use clap::CommandFactory;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CliConfig;
use inventory_db::Database;
use output::Printer;

/// How a run ended when no error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A command ran (including "not found" results).
    Completed,
    /// No subcommand was given; help was printed.
    NoCommand,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::NoCommand => ExitCode::FAILURE,
        }
    }
}

/// Initializes the tracing subscriber. Logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=inventory_db=trace` - Trace the database layer only
/// - Default: WARN, or DEBUG for the inventory crates with `--verbose`
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(CliConfig::default_log_filter(verbose)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one CLI invocation, writing command output to `out`.
///
/// Store errors are returned, not handled; the connection is closed first.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<Outcome> {
    let config = CliConfig::from(&cli.global);
    let mut printer = Printer::new(out, config.output);

    let Some(command) = cli.command else {
        printer.text(&Cli::command().render_help().to_string())?;
        return Ok(Outcome::NoCommand);
    };

    debug!(?command, path = %config.database_path.display(), "Running command");

    let mut db = Database::open(config.db_config())
        .await
        .with_context(|| {
            format!(
                "failed to open inventory database at {}",
                config.database_path.display()
            )
        })?;

    let result = commands::execute(&db.products(), command, &mut printer).await;
    db.close().await;

    result?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::config::OutputFormat;
    use inventory_db::{DbConfig, DbError, ErrorKind};

    static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

    /// A database file path unique to this test run.
    struct TempDb(PathBuf);

    impl TempDb {
        fn new() -> Self {
            let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
            let name = format!("inventory-cli-test-{}-{n}.db", std::process::id());
            TempDb(std::env::temp_dir().join(name))
        }

        fn arg(&self) -> String {
            self.0.display().to_string()
        }
    }

    impl Drop for TempDb {
        fn drop(&mut self) {
            for suffix in ["", "-wal", "-shm"] {
                let mut path = self.0.clone().into_os_string();
                path.push(suffix);
                let _ = std::fs::remove_file(path);
            }
        }
    }

    async fn run_args(args: &[&str]) -> anyhow::Result<(Outcome, String)> {
        let cli = Cli::try_parse_from(args)?;
        let mut buffer = Vec::new();
        let outcome = run(cli, &mut buffer).await?;
        Ok((outcome, String::from_utf8(buffer)?))
    }

    #[tokio::test]
    async fn test_no_command_prints_help_and_fails() {
        let (outcome, text) = run_args(&["inventory", "--db", ":memory:"]).await.unwrap();

        assert_eq!(outcome, Outcome::NoCommand);
        assert!(text.contains("Usage"));
        assert!(text.contains("search"));
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let (outcome, text) = run_args(&["inventory", "--db", ":memory:", "list"])
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(text, "The list is empty!\n");
    }

    #[tokio::test]
    async fn test_invalid_id_propagates_as_error() {
        let err = run_args(&["inventory", "--db", ":memory:", "get", "--id=0"])
            .await
            .unwrap_err();

        let cli_err = err.downcast_ref::<crate::error::CliError>().unwrap();
        assert!(matches!(
            cli_err,
            crate::error::CliError::Db(db) if db.kind() == ErrorKind::InvalidArgument
        ));
    }

    #[tokio::test]
    async fn test_state_persists_between_runs() {
        let file = TempDb::new();
        let db = file.arg();

        let (_, text) = run_args(&[
            "inventory", "--db", &db, "add", "--name", "Клавиатура", "--price", "25.5",
            "--quantity", "3",
        ])
        .await
        .unwrap();
        assert_eq!(text, "Saved product #1: Клавиатура\n");

        run_args(&[
            "inventory", "--db", &db, "add", "--name", "Мышь", "--price", "10", "--quantity",
            "5", "--description", "Ультра тихая",
        ])
        .await
        .unwrap();

        let (_, text) = run_args(&["inventory", "--db", &db, "search", "--query", "Ультра"])
            .await
            .unwrap();
        assert_eq!(
            text,
            "1 found:\n[2] Мышь | Price: 10.00 | Qty: 5 | - Ультра тихая\n"
        );

        let (_, text) = run_args(&["inventory", "--db", &db, "delete", "--id", "1"])
            .await
            .unwrap();
        assert_eq!(text, "Deleted: 1\n");

        let (outcome, text) = run_args(&["inventory", "--db", &db, "delete", "--id", "1"])
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(text, "Product not found: 1\n");
    }

    #[tokio::test]
    async fn test_commands_against_one_connection() {
        let mut db = Database::open(DbConfig::in_memory()).await.unwrap();
        let mut buffer = Vec::new();

        {
            let repo = db.products();
            let mut printer = Printer::new(&mut buffer, OutputFormat::Text);

            for args in [
                vec!["inventory", "add", "--name", "SSD", "--price", "80", "--quantity", "4"],
                vec![
                    "inventory", "update", "--id", "1", "--name", "SSD 1TB", "--price", "95.5",
                    "--quantity", "2", "--description", "NVMe",
                ],
                vec!["inventory", "update", "--id", "7", "--name", "X", "--price", "1",
                    "--quantity", "1", "--description", "Y"],
                vec!["inventory", "get", "--id", "1"],
                vec!["inventory", "list"],
            ] {
                let command = Cli::try_parse_from(args).unwrap().command.unwrap();
                commands::execute(&repo, command, &mut printer).await.unwrap();
            }
        }
        db.close().await;

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Saved product #1: SSD\n\
             Updated: 1\n\
             Product not found: 7\n\
             [1] SSD 1TB | Price: 95.50 | Qty: 2 | - NVMe\n\
             1 found:\n\
             [1] SSD 1TB | Price: 95.50 | Qty: 2 | - NVMe\n"
        );
    }

    #[tokio::test]
    async fn test_commands_fail_without_connection() {
        let db = Database::new(DbConfig::in_memory());
        let mut buffer = Vec::new();
        let mut printer = Printer::new(&mut buffer, OutputFormat::Text);

        let command = Cli::try_parse_from(["inventory", "list"]).unwrap().command.unwrap();
        let err = commands::execute(&db.products(), command, &mut printer)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::CliError::Db(DbError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_json_output() {
        let (_, text) = run_args(&[
            "inventory", "--db", ":memory:", "--json", "add", "--name", "Hub", "--price", "15",
            "--quantity", "7",
        ])
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Hub");
        assert_eq!(value["price"], 15.0);
    }
}
