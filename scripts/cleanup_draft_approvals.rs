//! Run with: cargo run --bin cleanup_draft_approvals
//!
//! Inspects the deprecated content_draft_approvals collection. Does NOT
//! delete anything unless CLEANUP_CONFIRM_DELETE=true is set; the strategy
//! is chosen with CLEANUP_STRATEGY=drop (default) or delete-many.
//! Only run after approval status has been migrated onto the draft nodes.

use std::env;
use std::process;

use content_migrations::migrations::cleanup_draft_approvals::{CleanupOptions, DeleteStrategy};
use content_migrations::{config, migrations};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let confirm_delete = env::var("CLEANUP_CONFIRM_DELETE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let strategy = match env::var("CLEANUP_STRATEGY") {
        Ok(value) => match DeleteStrategy::parse(&value) {
            Ok(strategy) => strategy,
            Err(e) => {
                eprintln!("✗ {}", e);
                process::exit(1);
            }
        },
        Err(_) => DeleteStrategy::Drop,
    };

    let options = CleanupOptions {
        confirm_delete,
        strategy,
    };

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await;

    match migrations::cleanup_draft_approvals::run(
        &db,
        migrations::DRAFT_APPROVALS_COLLECTION,
        &options,
    )
    .await
    {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("✗ Cleanup failed: {}", e);
            process::exit(1);
        }
    }
}
