//! ISBN shape validation.
//!
//! Only the layout is checked (10 or 13 digits, optional `-` or space
//! separators, ISBN-10 may end in `X`). The check digit itself is not
//! verified, and the catalog never re-validates identifiers it is handed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISBN_PATTERN: Regex =
        Regex::new(r"^(?:\d[- ]?){9}[\dXx]$|^(?:\d[- ]?){13}$").unwrap();
}

/// Returns true if `isbn` looks like an ISBN-10 or ISBN-13.
pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN_PATTERN.is_match(isbn)
}
