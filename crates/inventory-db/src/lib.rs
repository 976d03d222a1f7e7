//! # inventory-db: Database Layer for the Inventory Manager
//!
//! This crate owns the one SQLite connection a process run uses and the
//! repository that maps products to and from the `inventory` table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Data Flow                              │
//! │                                                                         │
//! │  CLI command (search --query "Ультра")                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐   ┌────────────┐  │   │
//! │  │   │   Database    │    │ ProductRepository │   │   schema   │  │   │
//! │  │   │   (pool.rs)   │◄───│  (product.rs)     │   │ inventory  │  │   │
//! │  │   │ 1 connection  │    │  CRUD + search    │   │ table DDL  │  │   │
//! │  │   └───────────────┘    └───────────────────┘   └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite file (db.db)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection configuration and lifecycle
//! - [`schema`] - Table definition
//! - [`error`] - Database error types
//! - [`repository`] - Product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_core::Product;
//! use inventory_db::{Database, DbConfig};
//!
//! let mut db = Database::open(DbConfig::new("db.db")).await?;
//!
//! let saved = db.products().add(Product::new("Мышь", 10.0, 5, None)).await?;
//! let hits = db.products().search("Мы").await?;
//!
//! db.close().await;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult, ErrorKind};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
