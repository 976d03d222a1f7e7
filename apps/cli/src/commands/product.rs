//! # Product Commands
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inventory update --id 3 --name .. --price .. --quantity .. --desc ..  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UpdateArgs::into_product()  ── bad id ──► DbError::InvalidArgument    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.update(&product)                                                 │
//! │       │                                                                 │
//! │       ├── true  ──► "Updated: 3"                                       │
//! │       └── false ──► "Product not found: 3"   (exit status stays 0)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use tracing::info;

use crate::cli::{AddArgs, IdArgs, SearchArgs, UpdateArgs};
use crate::error::CliResult;
use crate::output::{Change, Printer};
use inventory_db::{DbError, ProductRepository};

pub async fn handle_list<W: Write>(
    repo: &ProductRepository<'_>,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let products = repo.list().await?;
    printer.products(&products, "The list is empty!")
}

pub async fn handle_add<W: Write>(
    repo: &ProductRepository<'_>,
    args: AddArgs,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let saved = repo.add(args.into_product()).await?;
    info!(id = ?saved.id, name = %saved.name, "Product added");
    printer.saved(&saved)
}

pub async fn handle_get<W: Write>(
    repo: &ProductRepository<'_>,
    args: IdArgs,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let product = repo.get_by_id(args.id).await?;
    printer.product(product.as_ref(), args.id)
}

pub async fn handle_update<W: Write>(
    repo: &ProductRepository<'_>,
    args: UpdateArgs,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let id = args.id;
    let product = args.into_product().map_err(DbError::from)?;

    let updated = repo.update(&product).await?;
    info!(id, updated, "Update finished");
    printer.change(Change::Updated, id, updated)
}

pub async fn handle_delete<W: Write>(
    repo: &ProductRepository<'_>,
    args: IdArgs,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let deleted = repo.delete(args.id).await?;
    info!(id = args.id, deleted, "Delete finished");
    printer.change(Change::Deleted, args.id, deleted)
}

pub async fn handle_search<W: Write>(
    repo: &ProductRepository<'_>,
    args: SearchArgs,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    let products = repo.search(&args.query).await?;
    printer.products(&products, "No products matched the query.")
}
