//! # Seed Data Generator
//!
//! Populates the property store with the demo listing for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./nido_dev.db (default)
//! cargo run -p nido-db --bin seed
//!
//! # Specify database path
//! cargo run -p nido-db --bin seed -- --db ./data/nido.db
//! ```
//!
//! The listing is inserted once; later runs leave a non-empty store alone.

use nido_core::catalog::demo_property;
use nido_db::migrations::migration_status;
use nido_db::{Database, DbConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./nido_dev.db");

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
                println!("Nido Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./nido_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Nido Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let repo = db.properties();
    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} properties", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let property = demo_property();
    repo.insert(&property).await?;

    println!(
        "✓ Inserted '{}' ({} blocked dates)",
        property.title,
        property.blocked_dates.len()
    );

    // Read back through the same path the evaluator uses
    match repo.get_by_id(property.id.as_str()).await? {
        Some(stored) => println!("  Verified: {} at {}/night", stored.id, stored.nightly_rate),
        None => println!("⚠ Inserted listing could not be read back"),
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
