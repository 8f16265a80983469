//! # Seed Data Generator
//!
//! Populates a development database with the sample catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p vitrin-db --bin seed
//!
//! # Specify database path
//! cargo run -p vitrin-db --bin seed -- --db ./data/vitrin.db
//! ```
//!
//! ## Generated Products
//! A small fixed catalog across two stores, enough to exercise the
//! by-store listing and the discount rules by hand.

use std::env;

use vitrin_core::ProductCreate;
use vitrin_db::{Database, DbConfig};

/// Sample catalog: (name, price, discount, store).
const CATALOG: &[(&str, f64, f64, &str)] = &[
    ("AirFryer", 3000.0, 22.0, "ABC TECH"),
    ("Ütü", 1500.0, 10.0, "ABC TECH"),
    ("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"),
    ("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./vitrin_dev.db");

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
                println!("Vitrin Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./vitrin_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Vitrin Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let repo = db.products();
    for (name, price, discount, store) in CATALOG {
        let id = repo
            .insert(&ProductCreate {
                name: name.to_string(),
                price: *price,
                discount: *discount,
                store: store.to_string(),
            })
            .await?;
        println!("  [{}] {} ({})", id, name, store);
    }

    println!();
    println!("✓ Seeded {} products", CATALOG.len());

    Ok(())
}
