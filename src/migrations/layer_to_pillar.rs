//! Renames the content node type "layer" to "pillar" across the content
//! collections. Safe to re-run: a pass over an already-migrated collection
//! is a no-op.

use bson::{doc, Document};
use mongodb::Database;

const OLD_TYPE: &str = "layer";
const NEW_TYPE: &str = "pillar";

/// Totals accumulated over every collection in the run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    pub total_updated: u64,
    /// Driver errors plus residual "layer" documents found by the
    /// post-update verification.
    pub total_errors: u64,
}

impl MigrationSummary {
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }
}

#[derive(Debug)]
enum CollectionOutcome {
    Missing,
    NothingToMigrate,
    Migrated { modified: u64, residual: u64 },
}

/// Runs the rename against each named collection in order. A failure in one
/// collection is reported and counted but never stops the remaining
/// collections from being processed.
pub async fn run(db: &Database, collections: &[&str]) -> MigrationSummary {
    println!("Starting migration: {} -> {}", OLD_TYPE, NEW_TYPE);
    println!("==========================================");

    let mut summary = MigrationSummary::default();

    for name in collections {
        match migrate_collection(db, name).await {
            Ok(CollectionOutcome::Missing) => {
                println!("⚠ Collection {} does not exist, skipping", name);
            }
            Ok(CollectionOutcome::NothingToMigrate) => {}
            Ok(CollectionOutcome::Migrated { modified, residual }) => {
                summary.total_updated += modified;
                summary.total_errors += residual;
            }
            Err(e) => {
                println!("✗ Error migrating collection {}: {}", name, e);
                summary.total_errors += 1;
            }
        }
    }

    println!("\n==========================================");
    println!("Summary:");
    println!("  documents updated: {}", summary.total_updated);
    if summary.is_clean() {
        println!("  no errors");
    } else {
        println!("  ⚠ errors/warnings: {}", summary.total_errors);
    }
    println!("==========================================");
    println!("✓ Migration complete");

    summary
}

async fn migrate_collection(
    db: &Database,
    name: &str,
) -> Result<CollectionOutcome, mongodb::error::Error> {
    let existing = db.list_collection_names().await?;
    if !existing.iter().any(|c| c == name) {
        return Ok(CollectionOutcome::Missing);
    }

    let collection = db.collection::<Document>(name);

    let count_before = collection
        .count_documents(doc! { "type": OLD_TYPE })
        .await?;
    println!("\nCollection: {}", name);
    println!("  documents with type = \"{}\": {}", OLD_TYPE, count_before);

    if count_before == 0 {
        println!("  ✓ nothing to migrate");
        return Ok(CollectionOutcome::NothingToMigrate);
    }

    let result = collection
        .update_many(
            doc! { "type": OLD_TYPE },
            doc! { "$set": { "type": NEW_TYPE } },
        )
        .await?;
    println!("  ✓ updated {} documents", result.modified_count);

    // Verify: the predicate must no longer match anything. Residual matches
    // mean concurrent writers re-introduced "layer" documents mid-run.
    let count_after = collection
        .count_documents(doc! { "type": OLD_TYPE })
        .await?;
    let count_pillar = collection
        .count_documents(doc! { "type": NEW_TYPE })
        .await?;

    if count_after > 0 {
        println!(
            "  ⚠ warning: {} documents still have type = \"{}\"",
            count_after, OLD_TYPE
        );
    } else {
        println!("  ✓ verify: no documents left with type = \"{}\"", OLD_TYPE);
        println!(
            "  ✓ verify: {} documents have type = \"{}\"",
            count_pillar, NEW_TYPE
        );
    }

    Ok(CollectionOutcome::Migrated {
        modified: result.modified_count,
        residual: count_after,
    })
}
