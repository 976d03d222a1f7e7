//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  └── CoreError        - Identifier shape violations                    │
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - Connection, argument and storage failures      │
//! │                                                                         │
//! │  Flow: CoreError → DbError::InvalidArgument → CLI (anyhow report)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Identifier is not a positive integer.
    ///
    /// ## When This Occurs
    /// - `get --id 0` or a negative id on the command line
    /// - A stored row carries a non-positive id (decode failure)
    #[error("Invalid product id: {0} (ids are positive integers)")]
    InvalidId(i64),

    /// An operation needs a persisted product but the id is absent.
    #[error("Product id is required")]
    MissingId,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
