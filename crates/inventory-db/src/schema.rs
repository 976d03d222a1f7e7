//! # Schema
//!
//! The whole store is one table:
//!
//! | column      | type    | constraint                  |
//! |-------------|---------|-----------------------------|
//! | id          | INTEGER | primary key, auto-increment |
//! | name        | TEXT    | NOT NULL                    |
//! | price       | REAL    | NOT NULL                    |
//! | quantity    | INTEGER | NOT NULL                    |
//! | description | TEXT    | nullable                    |
//!
//! There are no migrations: the DDL is create-if-absent and runs on every
//! connect.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// SQL statement for creating the inventory table.
pub const INVENTORY_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    price       REAL NOT NULL,
    quantity    INTEGER NOT NULL,
    description TEXT
);
"#;

/// Creates the inventory table if it is missing. Idempotent.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    debug!(table = "inventory", "Ensuring schema");
    sqlx::query(INVENTORY_TABLE_DDL).execute(pool).await?;
    Ok(())
}

/// Checks whether a table exists (for diagnostics).
pub async fn table_exists(pool: &SqlitePool, table: &str) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(table)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = memory_pool().await;
        assert!(!table_exists(&pool, "inventory").await.unwrap());

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        assert!(table_exists(&pool, "inventory").await.unwrap());
    }

    #[tokio::test]
    async fn test_description_is_optional_and_name_required() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO inventory (name, price, quantity) VALUES ('SSD', 99.9, 2)")
            .execute(&pool)
            .await
            .unwrap();

        let missing_name =
            sqlx::query("INSERT INTO inventory (price, quantity) VALUES (1.0, 1)")
                .execute(&pool)
                .await;
        assert!(missing_name.is_err());
    }
}
