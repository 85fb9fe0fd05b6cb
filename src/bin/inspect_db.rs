//! Print the tables, columns, row counts and date coverage of a kona dataset.

use anyhow::{Context, Result};
use std::path::PathBuf;

use kona::database::{self, Database};

fn main() -> Result<()> {
    let file_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting database: {}", file_path.display());

    let conn = rusqlite::Connection::open_with_flags(
        &file_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
    )
    .with_context(|| format!("failed to open {}", file_path.display()))?;

    println!("\n=== TABLES ===");
    for table in database::table_names(&conn)? {
        let columns = database::table_columns(&conn, &table)?;
        let rows = database::row_count(&conn, &table)?;
        println!("  {} ({} rows)", table, rows);
        println!("    [{}]", columns.join(", "));
    }

    // Same checks the server runs at startup
    println!("\n=== DATASET ===");
    match Database::open(&file_path) {
        Ok((_, summary)) => {
            println!("  Stations:     {}", summary.station_count);
            println!("  Observations: {}", summary.observation_count);
            println!(
                "  Date range:   {} to {}",
                summary.first_date.as_deref().unwrap_or("-"),
                summary.last_date.as_deref().unwrap_or("-")
            );
        }
        Err(e) => println!("  Not servable: {}", e),
    }

    Ok(())
}
