//! # CLI Configuration
//!
//! Resolved from flags, falling back to environment variables:
//!
//! | flag        | env                 | default |
//! |-------------|---------------------|---------|
//! | `--db`      | `INVENTORY_DB_PATH` | `db.db` |
//! | `--json`    |                     | off     |
//! | `--verbose` | `RUST_LOG` wins     | off     |
//!
//! `--verbose` only affects logging, see [`CliConfig::default_log_filter`].

use std::path::PathBuf;

use crate::cli::Global;
use inventory_db::DbConfig;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Settings for one CLI run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Output format for stdout.
    pub output: OutputFormat,
}

impl CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(verbose: bool) -> &'static str {
        if verbose {
            "warn,inventory_cli=debug,inventory_db=debug"
        } else {
            "warn"
        }
    }

    /// Database configuration for this run.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }
}

impl From<&Global> for CliConfig {
    fn from(global: &Global) -> Self {
        CliConfig {
            database_path: global.db.clone(),
            output: if global.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
