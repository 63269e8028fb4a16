//! # Seed Data Generator
//!
//! Populates the database with a starter pizza shop menu.
//!
//! ## Usage
//! ```bash
//! # Seed ./pizza_shop.db (default)
//! cargo run -p pizzeria-db --bin seed
//!
//! # Specify database path, and add a sample invoice
//! cargo run -p pizzeria-db --bin seed -- --db ./data/pizza_shop.db --with-invoice
//! ```
//!
//! Skips seeding when the items table already has rows.

use std::env;

use pizzeria_core::{Money, NewInvoice, NewInvoiceItem, NewItem};
use pizzeria_db::{Database, DbConfig, InvoiceWriteMode};

/// Starter menu: (type, name, price in cents)
const MENU: &[(&str, &str, i64)] = &[
    ("pizza", "Margherita Pizza", 1099),
    ("pizza", "Pepperoni Pizza", 1249),
    ("pizza", "Hawaiian Pizza", 1299),
    ("pizza", "Quattro Formaggi Pizza", 1399),
    ("pizza", "Veggie Supreme Pizza", 1349),
    ("pizza", "BBQ Chicken Pizza", 1449),
    ("side", "Garlic Bread", 499),
    ("side", "Chicken Wings (6)", 799),
    ("side", "Caesar Salad", 649),
    ("drink", "Cola 330ml", 250),
    ("drink", "Lemonade", 299),
    ("drink", "Sparkling Water", 199),
    ("cake", "Tiramisu", 599),
    ("cake", "Chocolate Lava Cake", 649),
    ("cake", "New York Cheesecake", 579),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./pizza_shop.db");
    let mut with_invoice = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--with-invoice" => with_invoice = true,
            "--help" | "-h" => {
                println!("Pizzeria POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./pizza_shop.db)");
                println!("      --with-invoice Also create one sample invoice");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🍕 Pizzeria POS Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::connect(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Inserting menu...");

    let mut created = Vec::with_capacity(MENU.len());
    for (item_type, name, price_cents) in MENU {
        let new_item = NewItem {
            name: name.to_string(),
            price: Money::from_cents(*price_cents),
            item_type: item_type.to_string(),
        };

        match db.items().insert(&new_item).await {
            Ok(item) => {
                println!("  #{:<3} {:<24} {:>8}  ({})", item.id, item.name, item.price, item.item_type);
                created.push(item);
            }
            Err(e) => eprintln!("Failed to insert {}: {}", name, e),
        }
    }

    println!();
    println!("✓ Inserted {} items", created.len());

    if with_invoice && created.len() >= 2 {
        // Two of the first item, one of the last, priced like the frontend does
        let lines = [(&created[0], 2), (&created[created.len() - 1], 1)];
        let total: Money = lines
            .iter()
            .map(|(item, qty)| item.price.multiply_quantity(*qty))
            .sum();

        let invoice = NewInvoice {
            customer_name: "Walk-in Customer".to_string(),
            total_amount: total,
            items: lines
                .iter()
                .map(|(item, qty)| NewInvoiceItem {
                    item_id: item.id,
                    quantity: *qty,
                })
                .collect(),
        };

        let invoice_id = db
            .invoices()
            .create(&invoice, InvoiceWriteMode::Atomic)
            .await?;
        println!("✓ Created sample invoice #{} ({})", invoice_id, total);
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
