//! Interactive menu for the inventory.
//!
//! Reads raw lines, re-prompts until each field parses, and dispatches to
//! the [`Catalog`]. Works over any `BufRead`/`Write` pair so sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use log::debug;

use crate::catalog::Catalog;
use crate::error::{InventoryError, Result};
use crate::models::Book;
use crate::parsers::{parse_isbn, parse_price, parse_quantity, parse_sale_quantity};

const MENU: &str = "Book Inventory Management System\n\
                    1.) Add Book\n\
                    2.) Sell Book\n\
                    3.) Check Stock\n\
                    4.) Exit\n\n\
                    Choose an option: ";

/// Whether the session should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input reached end of file
    Closed,
}

/// Menu loop bound to an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the menu until the user picks Exit or input ends.
    ///
    /// Not-found, short-stock and bad-input conditions are printed and the
    /// loop carries on; persistence and console I/O failures are returned.
    pub fn run(&mut self, catalog: &mut Catalog) -> Result<()> {
        loop {
            let Some(option) = self.read_line(MENU)? else {
                return Ok(());
            };
            debug!("Menu option: {option:?}");

            let flow = match option.as_str() {
                "1" => self.add_book(catalog)?,
                "2" => self.sell_book(catalog)?,
                "3" => self.check_stock(catalog)?,
                "4" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Closed {
                return Ok(());
            }

            if self.read_line("Press Enter to continue...")?.is_none() {
                return Ok(());
            }
            write!(self.output, "\n\n")?;
        }
    }

    fn add_book(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        let Some(isbn) = self.prompt_until("Enter the ISBN: ", parse_isbn)? else {
            return Ok(Flow::Closed);
        };

        if let Some(existing) = catalog.find(&isbn) {
            let details = format!(
                "\nA book with the same ISBN already exists:\n\n\
                 Title: {}\nAuthor: {}\nPrice: {}\nCurrent Stock: {}\n",
                existing.title, existing.author, existing.price, existing.stock_quantity
            );
            writeln!(self.output, "{details}")?;
            let Some(quantity) = self.prompt_until(
                "Enter the quantity to be added (or 0 if no new stock to be added): ",
                parse_quantity,
            )?
            else {
                return Ok(Flow::Closed);
            };
            if quantity > 0 {
                match catalog.restock(&isbn, quantity) {
                    Ok(stock) => writeln!(self.output, "Stock updated. Current stock: {stock}")?,
                    Err(e) => self.report(e)?,
                }
            }
            return Ok(Flow::Continue);
        }

        let Some(title) = self.read_line("Enter the title: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(author) = self.read_line("Enter the author: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(price) = self.prompt_until("Enter the price: ", parse_price)? else {
            return Ok(Flow::Closed);
        };
        let Some(quantity) = self.prompt_until("Enter the stock quantity: ", parse_quantity)?
        else {
            return Ok(Flow::Closed);
        };

        match catalog.add(Book::new(title, author, isbn, price, quantity)) {
            Ok(_) => writeln!(self.output, "Book added to inventory.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn sell_book(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        let Some(isbn) =
            self.prompt_until("Enter the ISBN of the book to sell: ", parse_isbn)?
        else {
            return Ok(Flow::Closed);
        };
        let Some(quantity) =
            self.prompt_until("Enter the quantity to sell: ", parse_sale_quantity)?
        else {
            return Ok(Flow::Closed);
        };

        match catalog.sell(&isbn, quantity) {
            Ok(stock) => writeln!(self.output, "Sold {quantity}. Remaining stock: {stock}")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_stock(&mut self, catalog: &Catalog) -> Result<Flow> {
        let Some(isbn) = self.read_line("Enter the ISBN of the book to check: ")? else {
            return Ok(Flow::Closed);
        };

        match catalog.check_stock(&isbn) {
            Ok(report) => {
                writeln!(self.output, "Title: {}", report.title)?;
                writeln!(self.output, "Author: {}", report.author)?;
                writeln!(self.output, "Current Stock: {}", report.stock_quantity)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Prints conditions the user can recover from; anything else is returned.
    fn report(&mut self, err: InventoryError) -> Result<()> {
        match err {
            InventoryError::NotFound { .. }
            | InventoryError::InsufficientStock { .. }
            | InventoryError::MalformedInput(_) => {
                writeln!(self.output, "Error: {err}")?;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Prompts until `parse` accepts the line. `None` means input ended.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Writes `prompt` and reads one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
