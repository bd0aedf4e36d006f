//! Book Inventory - interactive and one-shot stock management.

use std::io;

use book_inventory::{Catalog, Command, Config, Console};
use clap::Parser;

fn main() {
    let config = Config::parse();

    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=book_inventory=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::info!("Inventory path: {}", config.inventory.display());

    // A snapshot that exists but cannot be parsed is fatal.
    let mut catalog = match Catalog::load(&config.inventory) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load inventory: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut catalog, config.command) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(catalog: &mut Catalog, command: Option<Command>) -> book_inventory::Result<()> {
    match command {
        None => {
            let stdin = io::stdin();
            Console::new(stdin.lock(), io::stdout()).run(catalog)
        }
        Some(Command::Import { file }) => {
            let stats = catalog.import(&file)?;
            println!(
                "Imported {} new and {} existing books from {}",
                stats.inserted,
                stats.merged,
                file.display()
            );
            Ok(())
        }
        Some(Command::Check { isbn }) => {
            let report = catalog.check_stock(&isbn)?;
            println!("Title: {}", report.title);
            println!("Author: {}", report.author);
            println!("Current Stock: {}", report.stock_quantity);
            Ok(())
        }
        Some(Command::Sell { isbn, quantity }) => {
            let stock = catalog.sell(&isbn, quantity)?;
            println!("Sold {quantity}. Remaining stock: {stock}");
            Ok(())
        }
        Some(Command::List) => {
            for book in catalog.books() {
                let stock = if book.is_sold_out() {
                    "sold out".to_string()
                } else {
                    book.stock_quantity.to_string()
                };
                println!(
                    "{} | {} | {} | {:.2} | {}",
                    book.isbn, book.title, book.author, book.price, stock
                );
            }
            Ok(())
        }
    }
}
