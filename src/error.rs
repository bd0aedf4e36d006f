//! Error types for book_inventory

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No book with this ISBN is in the catalog
    #[error("Book not found in inventory: {isbn}")]
    NotFound { isbn: String },

    /// A sale asked for more copies than are on hand
    #[error("Not enough stock for {title}. Current stock: {available} (requested {requested})")]
    InsufficientStock {
        isbn: String,
        title: String,
        available: u32,
        requested: u32,
    },

    /// User input failed validation or numeric coercion
    #[error("Invalid input: {0}")]
    MalformedInput(String),

    /// The snapshot exists but could not be read or parsed
    #[error("Failed to load inventory from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A snapshot row parsed but breaks the data model
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// The snapshot could not be written
    #[error("Failed to save inventory to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
