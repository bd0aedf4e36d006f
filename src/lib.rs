//! Book Inventory - single-store stock keeping backed by a CSV file
//!
//! Books are keyed by ISBN. Stock can be added (merging duplicates), sold
//! (never below zero) and checked; every change rewrites the CSV snapshot.

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod io;
pub mod isbn;
pub mod models;
pub mod parsers;

// Re-export commonly used items
pub use catalog::{Catalog, ImportStats};
pub use config::{Command, Config};
pub use console::Console;
pub use error::{InventoryError, Result};
pub use io::{read_inventory, write_inventory};
pub use isbn::is_valid_isbn;
pub use models::{AddOutcome, Book, StockReport};
