//! # Seed Data Generator
//!
//! Populates the database with a sample shop catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p till-db --bin seed
//!
//! # Specify database path
//! cargo run -p till-db --bin seed -- --db ./data/tillpoint.db
//! ```
//!
//! Each item has a name, a price in paise, an opening stock level, and
//! (for most items) a barcode.

use std::env;

use till_core::money::Money;
use till_core::types::CatalogItem;
use till_db::{Database, DbConfig};

/// Sample catalog: (name, price in paise, stock, barcode).
const SAMPLE_ITEMS: &[(&str, i64, i64, Option<&str>)] = &[
    ("Shirt", 49900, 25, Some("8901111000012")),
    ("Polo Shirt", 69900, 18, Some("8901111000029")),
    ("Jeans", 129900, 12, Some("8901111000036")),
    ("Trousers", 99900, 15, Some("8901111000043")),
    ("Kurta", 84900, 20, Some("8901111000050")),
    ("Dupatta", 34900, 30, Some("8901111000067")),
    ("Socks Pair", 9900, 60, Some("8901111000074")),
    ("Leather Belt", 59900, 10, Some("8901111000081")),
    ("Cotton Scarf", 24900, 22, Some("8901111000098")),
    ("Winter Jacket", 249900, 6, Some("8901111000104")),
    ("Handkerchief Set", 14900, 40, None),
    ("Gift Box", 19900, 35, None),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tillpoint_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("TillPoint Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tillpoint_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 TillPoint Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.inventory().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let repo = db.inventory();
    for (name, price_paise, stock, barcode) in SAMPLE_ITEMS {
        let item = CatalogItem {
            name: name.to_string(),
            price: Money::from_paise(*price_paise),
            stock: *stock,
            barcode: barcode.map(str::to_string),
        };
        repo.insert(&item).await?;
    }

    println!("✓ Seeded {} items", SAMPLE_ITEMS.len());

    db.close().await;
    Ok(())
}
