//! # Demo Data Generator
//!
//! Replaces the inventory with random products for development.
//!
//! ## Usage
//! ```bash
//! # 10 products (default) into ./db.db
//! cargo run -p inventory-cli --bin seed
//!
//! # Custom amount and file
//! cargo run -p inventory-cli --bin seed -- --count 50 --db ./data/demo.db
//! ```
//!
//! ## Generated Products
//! - Name: `"<adjective> <item> #<n>"`, e.g. `"Ультра SSD #3"`
//! - Price: 10.00 - 450.00, two decimals
//! - Quantity: 1 - 10
//! - Description: one of a fixed set

use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::error::CliResult;
use inventory_core::Product;
use inventory_db::{Database, DbConfig, ProductRepository};

const ADJECTIVES: &[&str] = &[
    "Ультра",
    "Премиум",
    "Профессиональный",
    "Компактный",
    "Бюджетный",
    "Беспроводной",
];

const ITEMS: &[&str] = &[
    "набор инструментов",
    "дисплей",
    "гарнитура",
    "проектор",
    "брендовый аксессуар",
    "смарт-колонка",
    "оперативная память",
    "SSD",
    "внешний накопитель",
    "адаптер",
];

const DESCRIPTIONS: &[&str] = &[
    "Надежный выбор для ежедневного использования.",
    "Оптимальное сочетание цены и качества.",
    "Тестовый товар из автоматической выборки.",
    "Отличный вариант для подарка.",
    "Поддерживается на всех платформах.",
];

/// Fill the inventory with random demo products
#[derive(Debug, Parser)]
#[command(name = "seed", version)]
#[command(about = "Fill the inventory with random demo products", long_about = None)]
pub struct SeedArgs {
    /// Number of products to generate
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// Path to the SQLite database file
    #[arg(long, env = "INVENTORY_DB_PATH", default_value = DbConfig::DEFAULT_PATH)]
    pub db: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

/// Builds one random, unsaved product. `index` is zero-based.
pub fn random_product<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Product {
    let name = format!(
        "{} {} #{}",
        pick(rng, ADJECTIVES),
        pick(rng, ITEMS),
        index + 1
    );
    let price = (rng.random_range(10.0..=450.0_f64) * 100.0).round() / 100.0;
    let quantity = rng.random_range(1..=10_i64);
    let description = pick(rng, DESCRIPTIONS).to_string();

    Product::new(name, price, quantity, Some(description))
}

/// Clears the table and inserts `count` random products.
///
/// Returns how many products were inserted.
pub async fn seed_products<R: Rng + ?Sized, W: Write>(
    repo: &ProductRepository<'_>,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> CliResult<usize> {
    let removed = repo.clear().await?;
    info!(removed, "Cleared inventory before seeding");

    for index in 0..count {
        let saved = repo.add(random_product(rng, index)).await?;
        let id = saved.id.map_or(0, |id| id.get());
        writeln!(out, "Product #{id} added: {}", saved.name)?;
    }

    writeln!(out, "Seeded {count} products.")?;
    Ok(count)
}

/// Runs the seed utility: open, seed, close.
pub async fn run_seed<W: Write>(args: SeedArgs, out: &mut W) -> anyhow::Result<usize> {
    info!(path = %args.db.display(), count = args.count, "Seeding database");

    let mut db = Database::open(DbConfig::new(&args.db))
        .await
        .with_context(|| format!("failed to open inventory database at {}", args.db.display()))?;

    let mut rng = rand::rng();
    let result = seed_products(&db.products(), args.count, &mut rng, out).await;
    db.close().await;

    Ok(result?)
}
