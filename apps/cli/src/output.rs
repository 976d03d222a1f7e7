//! # Output Rendering
//!
//! Text mode prints one line per product:
//!
//! ```text
//! 2 found:
//! [1] Клавиатура | Price: 25.50 | Qty: 3
//! [2] Мышь | Price: 10.00 | Qty: 5 | - Беспроводная
//! ```
//!
//! JSON mode prints the serde representation of the same data.

use serde::Serialize;
use serde_json::json;
use std::io::Write;

use crate::config::OutputFormat;
use crate::error::CliResult;
use inventory_core::Product;

/// Result of an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Updated,
    Deleted,
}

impl Change {
    fn label(self) -> &'static str {
        match self {
            Change::Updated => "Updated",
            Change::Deleted => "Deleted",
        }
    }

    fn json_key(self) -> &'static str {
        match self {
            Change::Updated => "updated",
            Change::Deleted => "deleted",
        }
    }
}

/// Formats a product as a single text line.
pub fn product_line(product: &Product) -> String {
    let id = product
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    let mut line = format!(
        "[{id}] {} | Price: {:.2} | Qty: {}",
        product.name, product.price, product.quantity
    );

    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(" | - ");
        line.push_str(description);
    }

    line
}

/// Writes command results in the configured format.
pub struct Printer<'w, W: Write> {
    out: &'w mut W,
    format: OutputFormat,
}

impl<'w, W: Write> Printer<'w, W> {
    pub fn new(out: &'w mut W, format: OutputFormat) -> Self {
        Printer { out, format }
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut *self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints a product list, or `empty_message` when there is nothing to show.
    pub fn products(&mut self, products: &[Product], empty_message: &str) -> CliResult<()> {
        if self.format == OutputFormat::Json {
            return self.json(products);
        }

        if products.is_empty() {
            writeln!(self.out, "{empty_message}")?;
            return Ok(());
        }

        writeln!(self.out, "{} found:", products.len())?;
        for product in products {
            writeln!(self.out, "{}", product_line(product))?;
        }
        Ok(())
    }

    /// Prints a single lookup result.
    pub fn product(&mut self, product: Option<&Product>, requested_id: i64) -> CliResult<()> {
        if self.format == OutputFormat::Json {
            return self.json(&product);
        }

        match product {
            Some(product) => writeln!(self.out, "{}", product_line(product))?,
            None => writeln!(self.out, "Product not found: {requested_id}")?,
        }
        Ok(())
    }

    /// Prints a freshly stored product.
    pub fn saved(&mut self, product: &Product) -> CliResult<()> {
        if self.format == OutputFormat::Json {
            return self.json(product);
        }

        let id = product.id.map_or(0, |id| id.get());
        writeln!(self.out, "Saved product #{id}: {}", product.name)?;
        Ok(())
    }

    /// Prints whether an update or delete touched a row.
    pub fn change(&mut self, change: Change, id: i64, applied: bool) -> CliResult<()> {
        if self.format == OutputFormat::Json {
            let mut body = json!({ "id": id });
            body[change.json_key()] = json!(applied);
            return self.json(&body);
        }

        if applied {
            writeln!(self.out, "{}: {id}", change.label())?;
        } else {
            writeln!(self.out, "Product not found: {id}")?;
        }
        Ok(())
    }

    /// Prints free text (help, progress) regardless of format.
    pub fn text(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}
