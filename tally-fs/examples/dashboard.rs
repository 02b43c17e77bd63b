//! Prints the admin dashboard of a file-backed store.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p tally-fs --example dashboard -- ./tally-data
//! ```
//!
//! The data directory is seeded on first run; edit the CSV files in it and run again.

use std::{env, path::PathBuf};

use tally::{Product, Store, User};
use tally_fs::FileStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./tally-data"));

    let mut store = Store::new(FileStore::new(&data_dir)?);
    let seeded = store.bootstrap()?;
    if !seeded.is_empty() {
        tracing::info!(?seeded, path = %data_dir.display(), "Seeded sample data");
    }

    let stats = store.statistics()?;
    println!("Users:    {} total, {} new today", stats.total_users, stats.new_users_today);
    println!("Products: {} total, {} new today", stats.total_products, stats.new_products_today);
    println!("Gender:   {} male, {} female", stats.male_users, stats.female_users);

    println!("\nRecent users");
    for user in store.recent_default::<User>()? {
        println!(
            "  #{:<4} {:<20} {:<28} {:<10} {}",
            user.id,
            user.name,
            user.email,
            user.role,
            user.registration_date.format("%Y-%m-%d")
        );
    }

    println!("\nRecent products");
    for product in store.recent_default::<Product>()? {
        println!(
            "  #{:<4} {:<24} {:<12} {:>12.0} {:>5} {}",
            product.id,
            product.name,
            product.category,
            product.price,
            product.stock,
            product.status
        );
    }

    Ok(())
}
