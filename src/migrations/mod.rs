use thiserror::Error;

pub mod cleanup_draft_approvals;
pub mod layer_to_pillar;
pub mod model;

/// Collections holding content nodes, in the order they are migrated.
pub const CONTENT_COLLECTIONS: [&str; 2] = ["content_nodes", "content_draft_nodes"];

/// Deprecated collection left over from the standalone approval flow.
pub const DRAFT_APPROVALS_COLLECTION: &str = "content_draft_approvals";

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("invalid cleanup strategy: {0} (expected \"drop\" or \"delete-many\")")]
    InvalidStrategy(String),
}
