//! # Database Connection
//!
//! Configuration and lifecycle of the single SQLite connection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Connection Lifecycle                               │
//! │                                                                         │
//! │  DbConfig::new(path)        ← Where the file lives                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config)      ← Disconnected handle                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  connect().await            ← Opens ONE connection, ensures schema     │
//! │       │                       (second call is a no-op)                 │
//! │       ▼                                                                 │
//! │  execute / query / fetch_*  ← Each statement autocommits               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  close().await              ← Releases the connection (idempotent)     │
//! │                                                                         │
//! │  Statements issued while disconnected fail with NotConnected.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handle is built by the composition root and lent to repositories by
//! reference; there is no global connection.

use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions,
    SqliteQueryResult, SqliteRow, SqliteSynchronous,
};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

/// Path understood as "no file, keep everything in memory".
const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust
/// use inventory_db::DbConfig;
/// use std::time::Duration;
///
/// let config = DbConfig::new("./data/inventory.db").connect_timeout(Duration::from_secs(5));
/// assert!(!config.is_in_memory());
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection to open.
    /// Default: 30 seconds
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Default file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "db.db";

    /// Creates a configuration for the given file. The file is created on
    /// connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every connect produces a fresh, isolated database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(DbError::ConnectionFailed);
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Full))
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(Self::DEFAULT_PATH)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the backing store.
///
/// Holds at most one physical connection: the pool is capped at one
/// connection that never idles out, so every statement of a run shares it.
#[derive(Debug)]
pub struct Database {
    config: DbConfig,
    pool: Option<SqlitePool>,
}

impl Database {
    /// Creates a disconnected handle.
    pub fn new(config: DbConfig) -> Self {
        Database { config, pool: None }
    }

    /// Creates a handle and connects it.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let db = Database::open(DbConfig::new("./db.db")).await?;
    /// ```
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        let mut db = Database::new(config);
        db.connect().await?;
        Ok(db)
    }

    /// Opens the connection and ensures the schema exists.
    ///
    /// Calling this on a connected handle does nothing.
    pub async fn connect(&mut self) -> DbResult<()> {
        if self.pool.is_some() {
            debug!("Already connected");
            return Ok(());
        }

        info!(
            path = %self.config.database_path.display(),
            "Opening database connection"
        );

        let options = self.config.connect_options()?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(self.config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(DbError::ConnectionFailed)?;

        schema::ensure_schema(&pool).await?;

        self.pool = Some(pool);
        Ok(())
    }

    /// Releases the connection. Safe to call repeatedly.
    pub async fn close(&mut self) {
        if let Some(pool) = self.pool.take() {
            info!("Closing database connection");
            pool.close().await;
        }
    }

    /// Whether a connection is currently open.
    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Returns the configuration this handle was built with.
    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    fn pool(&self) -> DbResult<&SqlitePool> {
        self.pool.as_ref().ok_or(DbError::NotConnected)
    }

    /// Runs a bound statement and returns its outcome
    /// (`last_insert_rowid()`, `rows_affected()`).
    ///
    /// ## Example
    /// ```rust,ignore
    /// let done = db
    ///     .execute(sqlx::query("DELETE FROM inventory WHERE id = ?1").bind(3_i64))
    ///     .await?;
    /// assert!(done.rows_affected() <= 1);
    /// ```
    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> DbResult<SqliteQueryResult> {
        let result = query.execute(self.pool()?).await?;
        Ok(result)
    }

    /// Runs a statement and materialises every result row.
    pub async fn query<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> DbResult<Vec<SqliteRow>> {
        let rows = query.fetch_all(self.pool()?).await?;
        Ok(rows)
    }

    /// Runs a typed statement and decodes every row.
    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    ) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let rows = query.fetch_all(self.pool()?).await?;
        Ok(rows)
    }

    /// Runs a typed statement and decodes the first row, if any.
    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    ) -> DbResult<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let row = query.fetch_optional(self.pool()?).await?;
        Ok(row)
    }

    /// Runs a statement returning a single value.
    pub async fn fetch_scalar<'q, O>(
        &self,
        query: QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> DbResult<O>
    where
        O: Send + Unpin,
        (O,): for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let value = query.fetch_one(self.pool()?).await?;
        Ok(value)
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        self.execute(sqlx::query("SELECT 1")).await.is_ok()
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use sqlx::Row;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();

        assert!(db.is_connected());
        assert!(db.config().is_in_memory());
        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_connect_creates_schema() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        let pool = db.pool().unwrap();

        assert!(schema::table_exists(pool, "inventory").await.unwrap());
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let mut db = Database::open(DbConfig::in_memory()).await.unwrap();
        db.execute(
            sqlx::query("INSERT INTO inventory (name, price, quantity) VALUES (?1, ?2, ?3)")
                .bind("SSD")
                .bind(120.0_f64)
                .bind(4_i64),
        )
        .await
        .unwrap();

        // Reconnecting must keep the same connection (and the same memory db).
        db.connect().await.unwrap();

        let count: i64 = db
            .fetch_scalar(sqlx::query_scalar("SELECT COUNT(*) FROM inventory"))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_execute_reports_insert_id_and_row_count() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();

        let first = db
            .execute(
                sqlx::query("INSERT INTO inventory (name, price, quantity) VALUES ('A', 1.0, 1)"),
            )
            .await
            .unwrap();
        let second = db
            .execute(
                sqlx::query("INSERT INTO inventory (name, price, quantity) VALUES ('B', 2.0, 2)"),
            )
            .await
            .unwrap();
        assert_eq!(first.last_insert_rowid(), 1);
        assert_eq!(second.last_insert_rowid(), 2);

        let updated = db
            .execute(sqlx::query("UPDATE inventory SET quantity = 0"))
            .await
            .unwrap();
        assert_eq!(updated.rows_affected(), 2);
    }

    #[tokio::test]
    async fn test_query_returns_rows_by_name() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        db.execute(sqlx::query(
            "INSERT INTO inventory (name, price, quantity, description) VALUES ('Hub', 15.0, 7, 'USB-C')",
        ))
        .await
        .unwrap();

        let rows = db
            .query(sqlx::query("SELECT * FROM inventory"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get::<String, _>("name"), "Hub");
        assert_eq!(rows[0].get::<Option<String>, _>("description").as_deref(), Some("USB-C"));
    }

    #[tokio::test]
    async fn test_operations_fail_when_not_connected() {
        let db = Database::new(DbConfig::in_memory());

        let err = db.execute(sqlx::query("SELECT 1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);

        let Err(err) = db.query(sqlx::query("SELECT 1")).await else {
            panic!("expected NotConnected");
        };
        assert!(matches!(err, DbError::NotConnected));
        assert!(!db.health_check().await);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut db = Database::open(DbConfig::in_memory()).await.unwrap();

        db.close().await;
        db.close().await;

        assert!(!db.is_connected());
        let err = db.execute(sqlx::query("SELECT 1")).await.unwrap_err();
        assert!(matches!(err, DbError::NotConnected));
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("inventory-db-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_open_fails_when_directory_is_missing() {
        let path = scratch_path("missing-dir").join("db.db");

        let err = Database::open(DbConfig::new(&path)).await.unwrap_err();

        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_file_database_uses_rollback_journal() {
        let dir = scratch_path("journal");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("db.db");

        let mut db = Database::open(DbConfig::new(&path)).await.unwrap();
        db.execute(sqlx::query(
            "INSERT INTO inventory (name, price, quantity) VALUES ('SSD', 80.0, 4)",
        ))
        .await
        .unwrap();

        let mode: String = db
            .fetch_scalar(sqlx::query_scalar("PRAGMA journal_mode"))
            .await
            .unwrap();
        assert_eq!(mode, "delete");
        assert!(!dir.join("db.db-wal").exists());

        db.close().await;

        // The insert is visible to a fresh connection.
        let mut reopened = Database::open(DbConfig::new(&path)).await.unwrap();
        let count: i64 = reopened
            .fetch_scalar(sqlx::query_scalar("SELECT COUNT(*) FROM inventory"))
            .await
            .unwrap();
        assert_eq!(count, 1);
        reopened.close().await;

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/inventory.db").connect_timeout(Duration::from_secs(2));

        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
        assert_eq!(DbConfig::default().database_path, PathBuf::from("db.db"));
    }
}
