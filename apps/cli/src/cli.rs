//! # Command-Line Surface
//!
//! ```text
//! inventory [--db PATH] [--json] [-v] <COMMAND>
//!
//!   list
//!   add    --name NAME --price PRICE --quantity QTY [--description DESC]
//!   get    --id ID
//!   update --id ID --name NAME --price PRICE --quantity QTY --description DESC
//!   delete --id ID
//!   search --query TEXT
//! ```
//!
//! Only type coercion happens here; values are not range-checked.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use inventory_core::{CoreResult, Product, ProductId};
use inventory_db::DbConfig;

/// Manage the product inventory
#[derive(Debug, Parser)]
#[command(name = "inventory", version)]
#[command(about = "Manage the product inventory", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct Global {
    /// Path to the SQLite database file
    #[arg(
        long,
        global = true,
        env = "INVENTORY_DB_PATH",
        default_value = DbConfig::DEFAULT_PATH
    )]
    pub db: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all products
    List,

    /// Add a new product
    Add(AddArgs),

    /// Show one product
    Get(IdArgs),

    /// Replace every field of a product
    Update(UpdateArgs),

    /// Delete a product
    Delete(IdArgs),

    /// Find products by name or description
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,

    /// Units in stock
    #[arg(long)]
    pub quantity: i64,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

impl AddArgs {
    /// Builds the unsaved product.
    pub fn into_product(self) -> Product {
        Product::new(self.name, self.price, self.quantity, self.description)
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Product id
    #[arg(long, allow_negative_numbers = true)]
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: String,

    /// New price
    #[arg(long)]
    pub price: f64,

    /// New quantity
    #[arg(long)]
    pub quantity: i64,

    /// New description
    #[arg(long)]
    pub description: String,
}

impl UpdateArgs {
    /// Builds the replacement product, failing on a malformed id.
    pub fn into_product(self) -> CoreResult<Product> {
        let id = ProductId::new(self.id)?;
        Ok(Product::new(self.name, self.price, self.quantity, Some(self.description)).with_id(id))
    }
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Product id
    #[arg(long, allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in names and descriptions
    #[arg(long)]
    pub query: String,
}
