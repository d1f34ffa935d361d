//! Integration tests for rulenet-graph against a live Neo4j instance.
//!
//! These tests require a local Neo4j (bolt://localhost:7687, neo4j/password).
//! Run with: cargo test --package rulenet-graph --test integration -- --ignored
//!
//! Each test tags its data with a unique label and removes it afterwards.
//! Tests take a shared lock because `remove_export_ids` and `clear_database`
//! touch every node in the database.

use std::sync::{Mutex, MutexGuard};

use rulenet_core::cypher::split_script;
use rulenet_core::{ExportNode, ExportRelationship};
use rulenet_graph::{GraphClient, GraphConfig};
use serde_json::json;

static LIVE_DB: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    LIVE_DB.lock().unwrap_or_else(|e| e.into_inner())
}

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    let client = match GraphClient::connect(&config).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            return None;
        }
    };
    match client.verify_connectivity().await {
        Ok(()) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not reachable): {e}");
            None
        }
    }
}

fn unique_label(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}_{nanos}")
}

async fn cleanup(client: &GraphClient, label: &str) {
    let q = neo4rs::query(&format!("MATCH (n:`{label}`) DETACH DELETE n"));
    let _ = client.run(q).await;
}

fn export_node(id: serde_json::Value, label: &str, name: &str) -> ExportNode {
    ExportNode {
        id,
        labels: vec![label.to_string()],
        properties: json!({"label": name, "score": 0.5, "tags": ["a", "b"]})
            .as_object()
            .cloned()
            .unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_create_nodes_and_relationship() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItPerson");

    client
        .create_export_node(&export_node(json!(format!("{label}-1")), &label, "Ada"))
        .await
        .unwrap();
    client
        .create_export_node(&export_node(json!(format!("{label}-2")), &label, "Alan"))
        .await
        .unwrap();

    let rel = ExportRelationship {
        rel_type: "knows".to_string(),
        start_node_id: json!(format!("{label}-1")),
        end_node_id: json!(format!("{label}-2")),
        properties: json!({"since": 1936}).as_object().cloned().unwrap(),
    };
    assert!(client.create_export_relationship(&rel).await.unwrap());

    let sampled = client.sample_nodes(&label, 10).await.unwrap();
    assert_eq!(sampled.len(), 2);
    assert!(sampled.iter().all(|n| n.get("_rulenet_id").is_some()));

    let keys = client.label_property_keys(&label, 50, 20).await.unwrap();
    assert!(keys.contains(&"label".to_string()));

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_relationship_with_missing_endpoint() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItOrphan");

    client
        .create_export_node(&export_node(json!(format!("{label}-1")), &label, "Solo"))
        .await
        .unwrap();

    let rel = ExportRelationship {
        rel_type: "knows".to_string(),
        start_node_id: json!(format!("{label}-1")),
        end_node_id: json!(format!("{label}-missing")),
        properties: serde_json::Map::new(),
    };
    assert!(!client.create_export_relationship(&rel).await.unwrap());

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_read_rows_and_stats() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItStats");

    client
        .create_export_node(&export_node(json!(1), &label, "Counted"))
        .await
        .unwrap();

    let stats = client.stats().await.unwrap();
    assert!(stats.nodes >= 1);
    assert!(stats.labels.contains(&label));

    let rows = client
        .read_rows(&format!("MATCH (n:`{label}`) RETURN n.label AS name"))
        .await
        .unwrap();
    assert_eq!(rows, vec![json!({"name": "Counted"})]);

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_nested_property_stored_as_json_string() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItNested");

    let node = ExportNode {
        id: json!(format!("{label}-1")),
        labels: vec![label.clone()],
        properties: json!({"label": "Configured", "meta": {"a": 1}})
            .as_object()
            .cloned()
            .unwrap(),
    };
    client.create_export_node(&node).await.unwrap();

    let sampled = client.sample_nodes(&label, 1).await.unwrap();
    assert_eq!(sampled.len(), 1);
    assert_eq!(sampled[0]["meta"], json!(r#"{"a":1}"#));

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_remove_export_ids() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItStrip");

    for (i, name) in ["Ada", "Alan"].iter().enumerate() {
        client
            .create_export_node(&export_node(json!(format!("{label}-{i}")), &label, name))
            .await
            .unwrap();
    }

    let stripped = client.remove_export_ids().await.unwrap();
    assert!(stripped >= 2);

    let sampled = client.sample_nodes(&label, 10).await.unwrap();
    assert_eq!(sampled.len(), 2);
    assert!(sampled.iter().all(|n| n.get("_rulenet_id").is_none()));

    assert_eq!(client.remove_export_ids().await.unwrap(), 0);

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_execute_script_statements() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItScript");

    let script = format!(
        "CREATE (:`{label}` {{label: 'one'}});\nCREATE (:`{label}` {{label: 'two'}});"
    );
    let statements = split_script(&script);
    assert_eq!(statements.len(), 2);
    for stmt in &statements {
        client.execute_statement(stmt).await.unwrap();
    }

    let rows = client
        .read_rows(&format!(
            "MATCH (n:`{label}`) RETURN n.label AS name ORDER BY name"
        ))
        .await
        .unwrap();
    assert_eq!(rows, vec![json!({"name": "one"}), json!({"name": "two"})]);

    cleanup(&client, &label).await;
}

#[tokio::test]
#[ignore = "requires a disposable live Neo4j; deletes all data"]
async fn test_clear_database() {
    let _guard = serial();
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let label = unique_label("ItClear");

    client
        .create_export_node(&export_node(json!(1), &label, "Doomed"))
        .await
        .unwrap();
    assert!(client.count_nodes().await.unwrap() >= 1);

    client.clear_database().await.unwrap();
    assert_eq!(client.count_nodes().await.unwrap(), 0);
    assert_eq!(client.count_relationships().await.unwrap(), 0);
}
