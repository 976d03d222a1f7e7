//! # Command Dispatch
//!
//! Each subcommand is one repository call followed by one print.
//!
//! - [`product`] - list, add, get, update, delete, search

pub mod product;

use std::io::Write;

use crate::cli::Command;
use crate::error::CliResult;
use crate::output::Printer;
use inventory_db::ProductRepository;

/// Runs a parsed subcommand against the repository.
pub async fn execute<W: Write>(
    repo: &ProductRepository<'_>,
    command: Command,
    printer: &mut Printer<'_, W>,
) -> CliResult<()> {
    match command {
        Command::List => product::handle_list(repo, printer).await,
        Command::Add(args) => product::handle_add(repo, args, printer).await,
        Command::Get(args) => product::handle_get(repo, args, printer).await,
        Command::Update(args) => product::handle_update(repo, args, printer).await,
        Command::Delete(args) => product::handle_delete(repo, args, printer).await,
        Command::Search(args) => product::handle_search(repo, args, printer).await,
    }
}
