//! Scripted console sessions.

use super::*;
use std::io::Cursor;
use tempfile::TempDir;

fn run_session(catalog: &mut Catalog, script: &str) -> String {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.run(catalog).unwrap();
    String::from_utf8(console.output().clone()).unwrap()
}

fn temp_catalog() -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(dir.path().join("inventory.csv")).unwrap();
    (dir, catalog)
}

#[test]
fn exit_option_ends_session() {
    let (_dir, mut catalog) = temp_catalog();
    let output = run_session(&mut catalog, "4\n");
    assert!(output.contains("Choose an option: "));
    assert!(!output.contains("Press Enter"));
}

#[test]
fn end_of_input_ends_session() {
    let (_dir, mut catalog) = temp_catalog();
    let output = run_session(&mut catalog, "");
    assert!(output.starts_with("Book Inventory Management System"));
}

#[test]
fn invalid_option_reprompts() {
    let (_dir, mut catalog) = temp_catalog();
    let output = run_session(&mut catalog, "9\n\n4\n");
    assert!(output.contains("Invalid option. Please try again."));
    assert_eq!(output.matches("Choose an option: ").count(), 2);
}

#[test]
fn add_new_book_reprompts_bad_fields() {
    let (_dir, mut catalog) = temp_catalog();
    let script = "1\n12345\n0-306-40615-2\nDune\nFrank Herbert\nabc\n9.99\n-1\n5\n\n4\n";

    let output = run_session(&mut catalog, script);

    assert!(output.contains("Invalid input: Invalid ISBN format"));
    assert!(output.contains("Book added to inventory."));
    let book = catalog.find("0-306-40615-2").unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.price, 9.99);
    assert_eq!(book.stock_quantity, 5);
}

#[test]
fn add_existing_book_shows_details_and_restocks() {
    let (_dir, mut catalog) = temp_catalog();
    catalog
        .add(Book::new("Dune", "Frank Herbert", "123456789X", 9.99, 5))
        .unwrap();

    let output = run_session(&mut catalog, "1\n123456789X\n3\n\n4\n");

    assert!(output.contains("A book with the same ISBN already exists"));
    assert!(output.contains("Current Stock: 5"));
    assert!(output.contains("Stock updated. Current stock: 8"));
    assert_eq!(catalog.find("123456789X").unwrap().stock_quantity, 8);
}

#[test]
fn sell_reports_insufficient_stock() {
    let (_dir, mut catalog) = temp_catalog();
    catalog
        .add(Book::new("Dune", "Frank Herbert", "123456789X", 9.99, 8))
        .unwrap();

    let output = run_session(&mut catalog, "2\n123456789X\n10\n\n2\n123456789X\n8\n\n4\n");

    assert!(output.contains("Error: Not enough stock for Dune. Current stock: 8"));
    assert!(output.contains("Sold 8. Remaining stock: 0"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn sell_rejects_zero_quantity() {
    let (_dir, mut catalog) = temp_catalog();
    catalog
        .add(Book::new("Dune", "Frank Herbert", "123456789X", 9.99, 8))
        .unwrap();

    let output = run_session(&mut catalog, "2\n123456789X\n0\n1\n\n4\n");

    assert!(output.contains("quantity to sell must be at least 1"));
    assert_eq!(catalog.find("123456789X").unwrap().stock_quantity, 7);
}

#[test]
fn check_stock_prints_report_or_not_found() {
    let (_dir, mut catalog) = temp_catalog();
    catalog
        .add(Book::new("Dune", "Frank Herbert", "123456789X", 9.99, 2))
        .unwrap();

    let output = run_session(&mut catalog, "3\n123456789X\n\n3\nunknown\n\n4\n");

    assert!(output.contains("Title: Dune\nAuthor: Frank Herbert\nCurrent Stock: 2\n"));
    assert!(output.contains("Error: Book not found in inventory: unknown"));
}
