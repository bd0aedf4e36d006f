use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Column order of the inventory CSV. Field order of [`Book`] must match.
pub const INVENTORY_HEADERS: [&str; 5] = ["title", "author", "isbn", "price", "stock_quantity"];

/// One book held in the inventory, keyed by ISBN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(deserialize_with = "from_trimmed")]
    pub price: f64,
    #[serde(deserialize_with = "from_trimmed")]
    pub stock_quantity: u32,
}

/// Parses a numeric column, tolerating padding from hand-edited files.
/// Text columns are kept byte for byte.
fn from_trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(de::Error::custom)
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        stock_quantity: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            price,
            stock_quantity,
        }
    }

    /// Returns true if the price is a finite, non-negative amount
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    /// Returns true if no copies are left on hand
    pub fn is_sold_out(&self) -> bool {
        self.stock_quantity == 0
    }

    /// Snapshot of the fields shown by a stock check
    pub fn stock_report(&self) -> StockReport {
        StockReport {
            title: self.title.clone(),
            author: self.author.clone(),
            stock_quantity: self.stock_quantity,
        }
    }
}

/// Result of a stock check: what the book is and how many are on hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    pub title: String,
    pub author: String,
    pub stock_quantity: u32,
}

/// What `Catalog::add` did with the incoming book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The ISBN was new and the book was appended
    Inserted,
    /// The ISBN existed; its stock is now `stock_quantity`
    Merged { stock_quantity: u32 },
}
