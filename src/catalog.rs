//! The book catalog and its CSV persistence.
//!
//! The catalog owns its books in insertion order. The CSV file is a derived
//! snapshot: every successful mutation rewrites it in full, failed
//! operations never touch it.

use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::io::{read_inventory, write_inventory};
use crate::models::{AddOutcome, Book, StockReport};

/// In-memory inventory bound to the CSV file it is saved to.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    books: Vec<Book>,
}

impl Catalog {
    /// Loads the catalog from `path`, or starts empty if the file is absent.
    ///
    /// Rows sharing an ISBN are merged into the first one so each ISBN
    /// appears once.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut catalog = Self {
            path,
            books: Vec::new(),
        };
        for book in read_inventory(&catalog.path)? {
            if let AddOutcome::Merged { .. } = catalog.merge(book.clone())? {
                log::warn!(
                    "Duplicate ISBN {} in {}, quantities merged",
                    book.isbn,
                    catalog.path.display()
                );
            }
        }
        log::info!(
            "Loaded {} books from {}",
            catalog.books.len(),
            catalog.path.display()
        );
        Ok(catalog)
    }

    /// Path of the CSV snapshot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a book by exact ISBN.
    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    fn find_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.isbn == isbn)
    }

    /// Applies `change` to a copy and keeps the copy only once it is saved,
    /// so memory never runs ahead of the file.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut staged = self.clone();
        let value = change(&mut staged)?;
        staged.save()?;
        *self = staged;
        Ok(value)
    }

    /// Writes the whole catalog to its CSV file.
    pub fn save(&self) -> Result<()> {
        write_inventory(&self.path, &self.books)?;
        log::info!("Saved {} books to {}", self.books.len(), self.path.display());
        Ok(())
    }

    /// Adds a book, or tops up stock if the ISBN is already known.
    ///
    /// On a merge only the quantity changes; the stored title, author and
    /// price win over the incoming ones. A negative or non-finite price is
    /// rejected even on a merge.
    pub fn add(&mut self, book: Book) -> Result<AddOutcome> {
        self.commit(|catalog| catalog.merge(book))
    }

    fn merge(&mut self, book: Book) -> Result<AddOutcome> {
        if !book.has_valid_price() {
            return Err(InventoryError::MalformedInput(format!(
                "price {} for {} is not a non-negative number",
                book.price, book.isbn
            )));
        }
        match self.find_mut(&book.isbn) {
            Some(existing) => {
                existing.stock_quantity = add_stock(existing, book.stock_quantity)?;
                log::info!(
                    "Added {} copies of {}, stock now {}",
                    book.stock_quantity,
                    existing.isbn,
                    existing.stock_quantity
                );
                Ok(AddOutcome::Merged {
                    stock_quantity: existing.stock_quantity,
                })
            }
            None => {
                log::info!("New book {} ({})", book.isbn, book.title);
                self.books.push(book);
                Ok(AddOutcome::Inserted)
            }
        }
    }

    /// Adds copies to a book that is already in the catalog.
    ///
    /// A quantity of zero changes nothing and skips the save.
    pub fn restock(&mut self, isbn: &str, quantity: u32) -> Result<u32> {
        if quantity == 0 {
            return self
                .find(isbn)
                .map(|book| book.stock_quantity)
                .ok_or_else(|| InventoryError::NotFound {
                    isbn: isbn.to_string(),
                });
        }
        self.commit(|catalog| {
            let book = catalog.find_mut(isbn).ok_or_else(|| InventoryError::NotFound {
                isbn: isbn.to_string(),
            })?;
            book.stock_quantity = add_stock(book, quantity)?;
            let stock = book.stock_quantity;
            log::info!("Restocked {isbn} with {quantity}, stock now {stock}");
            Ok(stock)
        })
    }

    /// Sells `quantity` copies and returns the remaining stock.
    ///
    /// All or nothing: if the book is unknown or short on stock the catalog
    /// is left as it was. Books that reach zero stay in the catalog.
    pub fn sell(&mut self, isbn: &str, quantity: u32) -> Result<u32> {
        self.commit(|catalog| catalog.take_stock(isbn, quantity))
    }

    fn take_stock(&mut self, isbn: &str, quantity: u32) -> Result<u32> {
        let book = self.find_mut(isbn).ok_or_else(|| InventoryError::NotFound {
            isbn: isbn.to_string(),
        })?;
        if quantity > book.stock_quantity {
            log::warn!(
                "Rejected sale of {quantity} x {isbn}, only {} in stock",
                book.stock_quantity
            );
            return Err(InventoryError::InsufficientStock {
                isbn: isbn.to_string(),
                title: book.title.clone(),
                available: book.stock_quantity,
                requested: quantity,
            });
        }
        book.stock_quantity -= quantity;
        let stock = book.stock_quantity;
        log::info!("Sold {quantity} x {isbn}, stock now {stock}");
        Ok(stock)
    }

    /// Reports title, author and stock for an ISBN.
    pub fn check_stock(&self, isbn: &str) -> Result<StockReport> {
        log::debug!("Checking stock for {isbn}");
        self.find(isbn)
            .map(Book::stock_report)
            .ok_or_else(|| InventoryError::NotFound {
                isbn: isbn.to_string(),
            })
    }

    /// Bulk-adds every row of another inventory CSV, saving once at the end.
    ///
    /// Returns how many rows created new entries and how many were merged.
    /// If any row is rejected none of them are applied.
    pub fn import(&mut self, path: &Path) -> Result<ImportStats> {
        // read_inventory treats a missing file as empty; for an import it is an error.
        if !path.exists() {
            return Err(InventoryError::Load {
                path: path.to_path_buf(),
                source: csv::Error::from(std::io::Error::from(std::io::ErrorKind::NotFound)),
            });
        }
        let incoming = read_inventory(path)?;
        if incoming.is_empty() {
            log::info!("Nothing to import from {}", path.display());
            return Ok(ImportStats::default());
        }
        let stats = self.commit(|catalog| {
            let mut stats = ImportStats::default();
            for book in incoming {
                match catalog.merge(book)? {
                    AddOutcome::Inserted => stats.inserted += 1,
                    AddOutcome::Merged { .. } => stats.merged += 1,
                }
            }
            Ok(stats)
        })?;
        log::info!(
            "Imported {} rows from {} ({} new, {} merged)",
            stats.inserted + stats.merged,
            path.display(),
            stats.inserted,
            stats.merged
        );
        Ok(stats)
    }
}

fn add_stock(book: &Book, quantity: u32) -> Result<u32> {
    book.stock_quantity.checked_add(quantity).ok_or_else(|| {
        InventoryError::MalformedInput(format!(
            "stock for {} would exceed {}",
            book.isbn,
            u32::MAX
        ))
    })
}

/// Statistics from a bulk import
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Rows whose ISBN was new to the catalog
    pub inserted: usize,
    /// Rows folded into an existing entry
    pub merged: usize,
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
