//! Write operations for loading exports into the graph.
//!
//! Exported nodes are created with their exporter id stored in
//! `_rulenet_id`, which relationship creation then matches on.

use neo4rs::query;
use serde_json::Value;

use rulenet_core::cypher::{label_clause, quote_identifier};
use rulenet_core::{ExportNode, ExportRelationship};

use crate::bolt::{properties_to_bolt, property_to_bolt};
use crate::client::{GraphClient, GraphError};

/// Property holding the exporter's node id.
pub const EXPORT_ID_PROPERTY: &str = "_rulenet_id";

impl GraphClient {
    /// Remove every node and relationship.
    pub async fn clear_database(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await?;
        tracing::info!("Cleared all existing data from database");
        Ok(())
    }

    /// Create one exported node with its labels and properties.
    pub async fn create_export_node(&self, node: &ExportNode) -> Result<(), GraphError> {
        let cypher = node_create_cypher(node)?;

        let mut props = node.properties.clone();
        props.insert(EXPORT_ID_PROPERTY.to_string(), node.id.clone());

        let q = query(&cypher).param("props", properties_to_bolt(&props));
        self.run(q).await
    }

    /// Create one exported relationship between nodes loaded earlier.
    ///
    /// Returns `false` when either endpoint is not in the graph.
    pub async fn create_export_relationship(
        &self,
        rel: &ExportRelationship,
    ) -> Result<bool, GraphError> {
        let cypher = relationship_create_cypher(&rel.rel_type)?;

        let q = query(&cypher)
            .param("start_id", property_to_bolt(&rel.start_node_id))
            .param("end_id", property_to_bolt(&rel.end_node_id))
            .param("props", properties_to_bolt(&rel.properties));

        Ok(self.query_one(q).await?.is_some())
    }

    /// Execute one raw statement (used when replaying an export script).
    pub async fn execute_statement(&self, statement: &str) -> Result<(), GraphError> {
        self.run(query(statement)).await
    }

    /// Strip the exporter ids once loading is finished.
    pub async fn remove_export_ids(&self) -> Result<i64, GraphError> {
        let cypher = format!(
            "MATCH (n) WHERE n.{EXPORT_ID_PROPERTY} IS NOT NULL
             REMOVE n.{EXPORT_ID_PROPERTY}
             RETURN count(n) AS cnt"
        );
        match self.query_one(query(&cypher)).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}

/// `CREATE (n:<labels> $props)` for an exported node.
pub fn node_create_cypher(node: &ExportNode) -> Result<String, GraphError> {
    let labels = label_clause(&node.labels_or_default())?;
    Ok(format!("CREATE (n{labels} $props)"))
}

/// Match both endpoints by exporter id and create the relationship.
pub fn relationship_create_cypher(rel_type: &str) -> Result<String, GraphError> {
    let rel_type = quote_identifier(rel_type)?;
    Ok(format!(
        "MATCH (a {{{EXPORT_ID_PROPERTY}: $start_id}})
         MATCH (b {{{EXPORT_ID_PROPERTY}: $end_id}})
         CREATE (a)-[r:{rel_type} $props]->(b)
         RETURN r"
    ))
}

/// Whether an exporter id can be matched at all.
pub fn is_usable_id(id: &Value) -> bool {
    !matches!(id, Value::Null | Value::Object(_) | Value::Array(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(labels: &[&str]) -> ExportNode {
        ExportNode {
            id: json!("n1"),
            labels: labels.iter().map(|s| s.to_string()).collect(),
            properties: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_node_create_cypher() {
        assert_eq!(
            node_create_cypher(&node(&["person", "Author"])).unwrap(),
            "CREATE (n:`person`:`Author` $props)"
        );
        assert_eq!(
            node_create_cypher(&node(&[])).unwrap(),
            "CREATE (n:`Node` $props)"
        );
    }

    #[test]
    fn test_node_create_cypher_escapes_labels() {
        assert_eq!(
            node_create_cypher(&node(&["odd`label"])).unwrap(),
            "CREATE (n:`odd``label` $props)"
        );
        assert!(node_create_cypher(&node(&[""])).is_err());
    }

    #[test]
    fn test_relationship_create_cypher() {
        let cypher = relationship_create_cypher("authored").unwrap();
        assert!(cypher.contains("MATCH (a {_rulenet_id: $start_id})"));
        assert!(cypher.contains("MATCH (b {_rulenet_id: $end_id})"));
        assert!(cypher.contains("CREATE (a)-[r:`authored` $props]->(b)"));
        assert!(cypher.trim_end().ends_with("RETURN r"));
        assert!(relationship_create_cypher("").is_err());
    }

    #[test]
    fn test_is_usable_id() {
        assert!(is_usable_id(&json!("n1")));
        assert!(is_usable_id(&json!(3)));
        assert!(!is_usable_id(&Value::Null));
        assert!(!is_usable_id(&json!({"a": 1})));
    }
}
