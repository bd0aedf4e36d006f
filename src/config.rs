//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default inventory file, relative to the working directory
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.csv";

/// Book inventory tracker - add, sell and check stock backed by a CSV file
#[derive(Parser, Debug)]
#[command(name = "book_inventory")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the inventory CSV file
    #[arg(
        short,
        long,
        env = "BOOK_INVENTORY_FILE",
        default_value = DEFAULT_INVENTORY_FILE
    )]
    pub inventory: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. info, debug)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Add every book from a CSV file in inventory format
    Import {
        /// CSV file with title,author,isbn,price,stock_quantity columns
        file: PathBuf,
    },

    /// Show title, author and stock for an ISBN
    Check {
        isbn: String,
    },

    /// Sell copies of a book
    Sell {
        isbn: String,
        /// Copies to sell, at least 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },

    /// List every book in the inventory
    List,
}
