//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (bad id)          sqlx::Error (SQLite rejected statement)   │
//! │       │                            │                                    │
//! │       ▼                            ▼                                    │
//! │  DbError::InvalidArgument    DbError::Storage (carried unmodified)     │
//! │       │                            │                                    │
//! │       └────────────┬───────────────┘                                    │
//! │                    ▼                                                    │
//! │  CLI: anyhow report on stderr, exit status 1                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not found" on update/delete is never an error; those operations return
//! `false` instead.

use inventory_core::CoreError;
use thiserror::Error;

/// Coarse classification of a [`DbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation attempted without an open connection.
    Connection,
    /// Missing or malformed product identifier.
    InvalidArgument,
    /// The store rejected a statement or could not be opened.
    Storage,
}

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A statement was issued before `connect()` or after `close()`.
    #[error("Database connection is not open")]
    NotConnected,

    /// Opening the database file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File is not a SQLite database
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// The caller passed an identifier that cannot reference a row.
    #[error("Invalid argument")]
    InvalidArgument(#[from] CoreError),

    /// SQLite rejected a statement (constraint violation, I/O failure, ...).
    #[error("Storage error")]
    Storage(#[from] sqlx::Error),
}

impl DbError {
    /// Returns the error's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::NotConnected => ErrorKind::Connection,
            DbError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DbError::ConnectionFailed(_) | DbError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kinds() {
        assert_eq!(DbError::NotConnected.kind(), ErrorKind::Connection);
        assert_eq!(
            DbError::from(CoreError::MissingId).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DbError::from(sqlx::Error::RowNotFound).kind(),
            ErrorKind::Storage
        );
        assert_eq!(
            DbError::ConnectionFailed(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let err = DbError::from(CoreError::InvalidId(0));
        let source = err.source().map(ToString::to_string);

        assert_eq!(
            source.as_deref(),
            Some("Invalid product id: 0 (ids are positive integers)")
        );
    }

    #[test]
    fn test_connection_failure_keeps_sqlx_error() {
        let err = DbError::ConnectionFailed(sqlx::Error::PoolTimedOut);

        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<sqlx::Error>());
        assert!(matches!(source, Some(sqlx::Error::PoolTimedOut)));
    }
}
