//! # Domain Types
//!
//! The inventory has a single entity, [`Product`], identified by a
//! store-assigned [`ProductId`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Lifecycle                                │
//! │                                                                         │
//! │  Product::new(..)        id = None     (built from CLI input)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository.add(..)      id = Some(n)  (SQLite assigns the rowid)      │
//! │       │                                                                 │
//! │       ├── list / get_by_id / search  → decoded from rows               │
//! │       ├── update                     → full replace by id              │
//! │       └── delete                     → row removed                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Product Id
// =============================================================================

/// Store-assigned product identifier.
///
/// SQLite rowids start at 1, so only strictly positive values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[serde(try_from = "i64", into = "i64")]
pub struct ProductId(i64);

impl ProductId {
    /// Validates a raw identifier.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::ProductId;
    ///
    /// assert!(ProductId::new(7).is_ok());
    /// assert!(ProductId::new(0).is_err());
    /// ```
    pub fn new(raw: i64) -> CoreResult<Self> {
        if raw <= 0 {
            return Err(CoreError::InvalidId(raw));
        }
        Ok(ProductId(raw))
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ProductId {
    type Error = CoreError;

    fn try_from(raw: i64) -> CoreResult<Self> {
        ProductId::new(raw)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// An inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store on insert; `None` until persisted.
    pub id: Option<ProductId>,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub quantity: i64,

    /// Optional free-form description.
    pub description: Option<String>,
}

impl Product {
    /// Creates an unsaved product.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        description: Option<String>,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            price,
            quantity,
            description,
        }
    }

    /// Returns the product with the given identifier attached.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the product has been stored.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the identifier, failing when the product was never stored.
    pub fn require_id(&self) -> CoreResult<ProductId> {
        self.id.ok_or(CoreError::MissingId)
    }
}

// =============================================================================
// Row Decoding
// =============================================================================

/// Statically typed decoder for rows of the `inventory` table.
///
/// Columns are read by name: `id`, `name`, `price`, `quantity`, `description`.
#[cfg(feature = "sqlx")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for Product {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let raw_id: i64 = row.try_get("id")?;
        let id = ProductId::new(raw_id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(Product {
            id: Some(id),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            description: row.try_get("description")?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
