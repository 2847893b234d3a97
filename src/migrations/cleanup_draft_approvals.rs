//! Removes the deprecated draft-approval collection. The approval status now
//! lives on the draft nodes themselves, so the collection is dead weight.
//!
//! Destructive work is gated behind [`CleanupOptions::confirm_delete`],
//! which defaults to off: a run with default options only reports what it
//! would delete.

use bson::{doc, Document};
use mongodb::Database;

use super::MigrationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStrategy {
    /// Drop the whole collection, indexes included. Single round-trip.
    Drop,
    /// Delete every document but keep the collection. Slower, leaves the
    /// collection in place in case anything still references it.
    DeleteMany,
}

impl DeleteStrategy {
    pub fn parse(s: &str) -> Result<Self, MigrationError> {
        match s {
            "drop" => Ok(Self::Drop),
            "delete-many" => Ok(Self::DeleteMany),
            other => Err(MigrationError::InvalidStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CleanupOptions {
    pub confirm_delete: bool,
    pub strategy: DeleteStrategy,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            confirm_delete: false,
            strategy: DeleteStrategy::Drop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Collection does not exist; nothing to clean up.
    Missing,
    /// Collection exists but holds no documents.
    AlreadyEmpty,
    /// Documents found but deletion was not confirmed. No change made.
    Skipped { count: u64 },
    /// Collection dropped; `count` documents went with it.
    Dropped { count: u64 },
    /// Documents deleted one by one; collection itself kept.
    Deleted { count: u64 },
}

/// Inspects the named collection and, only when `options.confirm_delete` is
/// set, removes its contents using the configured strategy. Driver errors
/// propagate immediately; there is no per-step recovery here.
pub async fn run(
    db: &Database,
    collection_name: &str,
    options: &CleanupOptions,
) -> Result<CleanupOutcome, MigrationError> {
    println!("Starting cleanup: {}", collection_name);
    println!("==========================================");

    let existing = db.list_collection_names().await?;
    if !existing.iter().any(|c| c == collection_name) {
        println!("⚠ Collection {} does not exist, nothing to clean up", collection_name);
        println!("✓ Cleanup complete");
        return Ok(CleanupOutcome::Missing);
    }

    let collection = db.collection::<Document>(collection_name);
    let count = collection.count_documents(doc! {}).await?;
    println!("Collection: {}", collection_name);
    println!("  total documents: {}", count);

    if count == 0 {
        println!("  ✓ collection is already empty");
        println!("✓ Cleanup complete");
        return Ok(CleanupOutcome::AlreadyEmpty);
    }

    println!(
        "\n⚠ WARNING: cleanup would delete {} documents from {}",
        count, collection_name
    );
    println!(
        "  Back up first: mongoexport --db=<db> --collection={} --out=backup.json",
        collection_name
    );

    if !options.confirm_delete {
        println!("  Deletion not confirmed; no changes made.");
        println!("  Set CLEANUP_CONFIRM_DELETE=true to delete.");
        println!("✓ Cleanup complete (nothing deleted)");
        return Ok(CleanupOutcome::Skipped { count });
    }

    let outcome = match options.strategy {
        DeleteStrategy::Drop => {
            collection.drop().await?;
            println!("  ✓ dropped collection {}", collection_name);
            CleanupOutcome::Dropped { count }
        }
        DeleteStrategy::DeleteMany => {
            let result = collection.delete_many(doc! {}).await?;
            println!("  ✓ deleted {} documents", result.deleted_count);
            CleanupOutcome::Deleted {
                count: result.deleted_count,
            }
        }
    };

    println!("✓ Cleanup complete");
    Ok(outcome)
}
