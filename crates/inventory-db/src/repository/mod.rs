//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI handler                                                           │
//! │       │  db.products().search("Ультра")                                │
//! │       ▼                                                                 │
//! │  ProductRepository<'db>  (borrows the Database handle)                 │
//! │  ├── add / list / get_by_id                                            │
//! │  ├── update / delete                                                   │
//! │  └── search / count / clear                                            │
//! │       │  parameterised SQL                                              │
//! │       ▼                                                                 │
//! │  Database::execute / fetch_*                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search

pub mod product;
