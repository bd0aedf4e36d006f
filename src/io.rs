use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::models::{Book, INVENTORY_HEADERS};

/// Reads every book from an inventory CSV.
///
/// A missing file is a first run and yields an empty list. Any row that
/// fails to parse aborts the whole read. Text columns are returned exactly
/// as stored; only the numeric columns are trimmed.
pub fn read_inventory(path: &Path) -> Result<Vec<Book>> {
    let load_err = |source: csv::Error| InventoryError::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No inventory at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(load_err(csv::Error::from(e))),
    };

    let mut rdr = csv::ReaderBuilder::new().from_reader(file);
    let headers = rdr.headers().map_err(load_err)?.clone();

    let mut books = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(load_err)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let book: Book = record.deserialize(Some(&headers)).map_err(load_err)?;
        check_book(&book, line)?;
        books.push(book);
    }

    log::debug!("Read {} rows from {}", books.len(), path.display());
    Ok(books)
}

fn check_book(book: &Book, line: u64) -> Result<()> {
    if !book.has_valid_price() {
        return Err(InventoryError::InvalidRecord {
            line,
            reason: format!("price {} is not a non-negative number", book.price),
        });
    }
    Ok(())
}

/// Overwrites the inventory CSV with `books`, header first.
///
/// Rows go to a sibling `.tmp` file which is then renamed over `path`, so
/// readers see either the old snapshot or the new one.
pub fn write_inventory(path: &Path, books: &[Book]) -> Result<()> {
    let tmp = tmp_path(path);
    let save_err = |source: std::io::Error| InventoryError::Save {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp)
        .map_err(|e| save_err(e.into()))?;
    wtr.write_record(INVENTORY_HEADERS)
        .map_err(|e| save_err(e.into()))?;
    for book in books {
        wtr.serialize(book).map_err(|e| save_err(e.into()))?;
    }
    wtr.flush().map_err(save_err)?;
    drop(wtr);

    fs::rename(&tmp, path).map_err(save_err)?;
    log::debug!("Wrote {} rows to {}", books.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
