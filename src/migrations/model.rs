use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A node in the content tree. Only `type` is touched by the migrations;
/// the remaining fields exist so callers and tests can work with the
/// documents the way the CMS writes them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContentNode {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "type")]
    pub node_type: String,
    pub title: Option<String>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl ContentNode {
    pub fn new(node_type: impl Into<String>, title: Option<String>) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            node_type: node_type.into(),
            title,
            created_at: now,
            updated_at: now,
        }
    }
}
