//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD by store-assigned id
//! - Substring search over name and description
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Search Works                                     │
//! │                                                                         │
//! │  User types: "Ультра"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pattern: "%Ультра%"   (query is NOT escaped: '%' and '_' in the       │
//! │       │                 query act as wildcards)                        │
//! │       ▼                                                                 │
//! │  WHERE name LIKE ?1 OR description LIKE ?1 ORDER BY name               │
//! │                                                                         │
//! │  SQLite's LIKE folds case for ASCII letters only, so "ssd" finds       │
//! │  "SSD" but "ультра" does not find "Ультра".                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use inventory_core::{Product, ProductId};

const SELECT_COLUMNS: &str = "SELECT id, name, price, quantity, description FROM inventory";

/// Repository for product database operations.
///
/// Borrows the [`Database`] handle owned by the caller.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let saved = repo.add(Product::new("Мышь", 10.0, 5, None)).await?;
/// let found = repo.get_by_id(saved.require_id()?.get()).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProductRepository<'db> {
    db: &'db Database,
}

impl<'db> ProductRepository<'db> {
    /// Creates a new ProductRepository.
    pub fn new(db: &'db Database) -> Self {
        ProductRepository { db }
    }

    /// Inserts a product and returns it with the store-assigned id.
    ///
    /// Any id already set on `product` is ignored.
    pub async fn add(&self, product: Product) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = self
            .db
            .execute(
                sqlx::query(
                    "INSERT INTO inventory (name, price, quantity, description) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .bind(product.name.as_str())
                .bind(product.price)
                .bind(product.quantity)
                .bind(product.description.as_deref()),
            )
            .await?;

        let id = ProductId::new(result.last_insert_rowid())?;
        debug!(%id, "Product inserted");

        Ok(product.with_id(id))
    }

    /// Lists every product ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = self
            .db
            .fetch_all(sqlx::query_as::<_, Product>(&format!(
                "{SELECT_COLUMNS} ORDER BY name"
            )))
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    /// * `Err(DbError::InvalidArgument)` - `id` is not positive
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let id = ProductId::new(id)?;
        debug!(%id, "Fetching product");

        let product = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
                    .bind(id),
            )
            .await?;

        Ok(product)
    }

    /// Replaces every field of the stored product with the same id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row overwritten
    /// * `Ok(false)` - No row with that id
    /// * `Err(DbError::InvalidArgument)` - `product.id` is missing
    pub async fn update(&self, product: &Product) -> DbResult<bool> {
        let id = product.require_id()?;
        debug!(%id, "Updating product");

        let result = self
            .db
            .execute(
                sqlx::query(
                    "UPDATE inventory \
                     SET name = ?1, price = ?2, quantity = ?3, description = ?4 \
                     WHERE id = ?5",
                )
                .bind(product.name.as_str())
                .bind(product.price)
                .bind(product.quantity)
                .bind(product.description.as_deref())
                .bind(id),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row removed
    /// * `Ok(false)` - No row with that id
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        let id = ProductId::new(id)?;
        debug!(%id, "Deleting product");

        let result = self
            .db
            .execute(sqlx::query("DELETE FROM inventory WHERE id = ?1").bind(id))
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finds products whose name or description contains `query`,
    /// ordered by name.
    pub async fn search(&self, query: &str) -> DbResult<Vec<Product>> {
        debug!(query = %query, "Searching products");

        let pattern = format!("%{query}%");

        let products = self
            .db
            .fetch_all(
                sqlx::query_as::<_, Product>(&format!(
                    "{SELECT_COLUMNS} WHERE name LIKE ?1 OR description LIKE ?1 ORDER BY name"
                ))
                .bind(pattern),
            )
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count = self
            .db
            .fetch_scalar(sqlx::query_scalar("SELECT COUNT(*) FROM inventory"))
            .await?;

        Ok(count)
    }

    /// Removes every product and returns how many were deleted.
    pub async fn clear(&self) -> DbResult<u64> {
        let result = self.db.execute(sqlx::query("DELETE FROM inventory")).await?;

        debug!(removed = result.rows_affected(), "Cleared inventory");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
