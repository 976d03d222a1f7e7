//! # CLI Error Type
//!
//! ```text
//! DbError (connection / argument / storage) ──┐
//! io::Error (stdout closed)                   ├──► CliError ──► anyhow in main
//! serde_json::Error (--json encoding)         ┘
//! ```
//!
//! Nothing is caught or retried: any error ends the run with status 1.

use std::io;

use inventory_db::DbError;
use thiserror::Error;

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Failed to write output")]
    Io(#[from] io::Error),

    #[error("Failed to encode JSON output")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
