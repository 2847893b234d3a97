//! Run with: cargo run --bin migrate_layer_to_pillar
//!
//! Renames type "layer" to "pillar" in content_nodes and content_draft_nodes.
//! Back up before running. Safe to re-run once it has completed cleanly.

use content_migrations::{config, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await;

    let summary = migrations::layer_to_pillar::run(&db, &migrations::CONTENT_COLLECTIONS).await;

    if !summary.is_clean() {
        println!("\n⚠ Finished with {} errors/warnings, review the output above", summary.total_errors);
    }

    Ok(())
}
