use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::Database;

use content_migrations::config;
use content_migrations::migrations::layer_to_pillar;
use content_migrations::migrations::model::ContentNode;

async fn setup_db() -> Database {
    dotenvy::dotenv().ok();
    config::database::connect().await
}

fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, ObjectId::new().to_hex())
}

async fn seed_nodes(db: &Database, name: &str, layer: usize, article: usize) {
    let collection = db.collection::<ContentNode>(name);
    for i in 0..layer {
        collection
            .insert_one(ContentNode::new("layer", Some(format!("Layer {}", i))))
            .await
            .unwrap();
    }
    for i in 0..article {
        collection
            .insert_one(ContentNode::new("article", Some(format!("Article {}", i))))
            .await
            .unwrap();
    }
}

async fn count_type(db: &Database, name: &str, node_type: &str) -> u64 {
    db.collection::<Document>(name)
        .count_documents(doc! { "type": node_type })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_rename_updates_layers_and_preserves_others() {
    let db = setup_db().await;
    let name = unique_name("content_nodes_test");

    seed_nodes(&db, &name, 3, 2).await;

    let summary = layer_to_pillar::run(&db, &[&name]).await;

    assert_eq!(summary.total_updated, 3);
    assert!(summary.is_clean());
    assert_eq!(count_type(&db, &name, "layer").await, 0);
    assert_eq!(count_type(&db, &name, "pillar").await, 3);
    assert_eq!(count_type(&db, &name, "article").await, 2);

    // Other fields of the renamed documents are untouched
    let renamed: Vec<ContentNode> = db
        .collection::<ContentNode>(&name)
        .find(doc! { "type": "pillar" })
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert!(renamed
        .iter()
        .all(|n| n.title.as_deref().unwrap_or("").starts_with("Layer ")));

    db.collection::<Document>(&name).drop().await.unwrap();
}

#[tokio::test]
async fn test_second_run_is_a_noop() {
    let db = setup_db().await;
    let name = unique_name("content_nodes_test");

    seed_nodes(&db, &name, 2, 1).await;

    let first = layer_to_pillar::run(&db, &[&name]).await;
    assert_eq!(first.total_updated, 2);

    let second = layer_to_pillar::run(&db, &[&name]).await;
    assert_eq!(second.total_updated, 0);
    assert!(second.is_clean());
    assert_eq!(count_type(&db, &name, "pillar").await, 2);

    db.collection::<Document>(&name).drop().await.unwrap();
}

#[tokio::test]
async fn test_missing_collection_is_skipped() {
    let db = setup_db().await;
    let existing = unique_name("content_nodes_test");
    let missing = unique_name("no_such_collection");

    seed_nodes(&db, &existing, 2, 0).await;

    let summary = layer_to_pillar::run(&db, &[&missing, &existing]).await;

    assert_eq!(summary.total_updated, 2);
    assert!(summary.is_clean());

    db.collection::<Document>(&existing).drop().await.unwrap();
}

#[tokio::test]
async fn test_failure_in_one_collection_does_not_stop_the_rest() {
    let db = setup_db().await;
    let first = unique_name("content_nodes_test");
    let poisoned = unique_name("content_nodes_poisoned");
    let last = unique_name("content_draft_nodes_test");

    seed_nodes(&db, &first, 1, 0).await;
    seed_nodes(&db, &last, 2, 0).await;

    // A validator pinning type to "layer" makes the bulk update fail with a
    // document validation error, standing in for a mid-run driver failure.
    db.create_collection(&poisoned)
        .validator(doc! { "type": { "$eq": "layer" } })
        .await
        .unwrap();
    db.collection::<ContentNode>(&poisoned)
        .insert_one(ContentNode::new("layer", None))
        .await
        .unwrap();

    let summary = layer_to_pillar::run(&db, &[&first, &poisoned, &last]).await;

    // Both healthy collections were processed despite the failure in between
    assert_eq!(summary.total_updated, 3);
    assert!(summary.total_errors >= 1);
    assert_eq!(count_type(&db, &first, "pillar").await, 1);
    assert_eq!(count_type(&db, &last, "pillar").await, 2);

    for name in [&first, &poisoned, &last] {
        db.collection::<Document>(name).drop().await.unwrap();
    }
}
