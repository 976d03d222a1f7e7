//! # inventory-core: Domain Types for the Inventory Manager
//!
//! This crate holds the product record and its identifier. It performs no I/O;
//! the database layer lives in `inventory-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`inventory`)                       │   │
//! │  │        list, add, get, update, delete, search                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    inventory-db                                 │   │
//! │  │          Database (one connection) + ProductRepository          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inventory-core (THIS CRATE) ★                   │   │
//! │  │            Product • ProductId • CoreError                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `ProductId`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{Product, ProductId};
//!
//! let keyboard = Product::new("Keyboard", 25.5, 3, None);
//! assert!(!keyboard.is_persisted());
//!
//! let stored = keyboard.with_id(ProductId::new(1).unwrap());
//! assert_eq!(stored.id.map(ProductId::get), Some(1));
//! ```

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Product, ProductId};
