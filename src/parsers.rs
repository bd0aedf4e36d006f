//! Field parsing utilities for console input.
//!
//! Each function validates one raw line once and returns a `Result`;
//! re-prompting on failure is left to the caller.

use log::{debug, warn};

use crate::error::{InventoryError, Result};
use crate::isbn::is_valid_isbn;

/// Parses an ISBN, rejecting anything that is not ISBN-10/13 shaped.
pub fn parse_isbn(input: &str) -> Result<String> {
    let isbn = input.trim();
    if is_valid_isbn(isbn) {
        debug!("Accepted ISBN: {isbn}");
        Ok(isbn.to_string())
    } else {
        warn!("Rejected ISBN '{isbn}'");
        Err(InventoryError::MalformedInput("Invalid ISBN format".to_string()))
    }
}

/// Parses a non-negative price such as "12.50".
pub fn parse_price(input: &str) -> Result<f64> {
    let raw = input.trim();
    debug!("Parsing price string: {raw}");
    let price = raw.parse::<f64>().map_err(|e| {
        warn!("Failed to parse price '{raw}': {e}");
        InventoryError::MalformedInput(format!("could not convert '{raw}' to a price"))
    })?;

    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::MalformedInput(format!(
            "price must be a non-negative number, got '{raw}'"
        )));
    }
    Ok(price)
}

/// Parses a stock quantity; zero is allowed.
pub fn parse_quantity(input: &str) -> Result<u32> {
    let raw = input.trim();
    debug!("Parsing quantity: {raw}");
    raw.parse::<u32>().map_err(|e| {
        warn!("Failed to parse quantity '{raw}': {e}");
        InventoryError::MalformedInput(format!(
            "'{raw}' is not a whole number of copies"
        ))
    })
}

/// Parses the number of copies to sell, which must be at least one.
pub fn parse_sale_quantity(input: &str) -> Result<u32> {
    match parse_quantity(input)? {
        0 => Err(InventoryError::MalformedInput(
            "quantity to sell must be at least 1".to_string(),
        )),
        quantity => Ok(quantity),
    }
}

#[cfg(test)]
#[path = "parsers_tests.rs"]
mod tests;
