//! Export document types.
//!
//! The graph builder produces two JSON export formats:
//! - the Cypher format (`nodes`, `relationships`, `cypherScript`) consumed by
//!   the Neo4j loader
//! - the tensor format (`nodeFeatures`, `edgeIndices`, ...) consumed by the
//!   heterogeneous-graph converter

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Label applied to nodes exported without any labels.
pub const DEFAULT_NODE_LABEL: &str = "Node";

/// Relationship type applied when the export omits one.
pub const DEFAULT_RELATIONSHIP_TYPE: &str = "RELATED_TO";

// ── Cypher Format ─────────────────────────────────────────────────

/// A graph export in the Cypher format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neo4jExport {
    #[serde(default)]
    pub nodes: Vec<ExportNode>,
    #[serde(default)]
    pub relationships: Vec<ExportRelationship>,
    /// Ready-to-run Cypher statements separated by `;`.
    #[serde(default)]
    pub cypher_script: Option<String>,
}

/// A node record. The `id` is the exporter's identifier (string or number)
/// and is only meaningful for wiring relationships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportNode {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A relationship record referencing its endpoints by export node id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRelationship {
    #[serde(rename = "type", default = "default_relationship_type")]
    pub rel_type: String,
    #[serde(default)]
    pub start_node_id: Value,
    #[serde(default)]
    pub end_node_id: Value,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

fn default_relationship_type() -> String {
    DEFAULT_RELATIONSHIP_TYPE.to_string()
}

impl Neo4jExport {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The embedded script, if present and not blank.
    pub fn script(&self) -> Option<&str> {
        self.cypher_script
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

impl ExportNode {
    /// Labels to apply, falling back to `Node` when the export has none.
    pub fn labels_or_default(&self) -> Vec<String> {
        if self.labels.is_empty() {
            vec![DEFAULT_NODE_LABEL.to_string()]
        } else {
            self.labels.clone()
        }
    }

    /// Human-readable name for progress output: the `label` property when it
    /// is a string, otherwise the id.
    pub fn display_name(&self) -> String {
        match self.properties.get("label") {
            Some(Value::String(s)) => s.clone(),
            _ => value_to_text(&self.id),
        }
    }
}

/// Render an id value without the quotes serde_json puts around strings.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

// ── Tensor Format ─────────────────────────────────────────────────

/// A heterogeneous graph export in the tensor format.
///
/// Edge maps are keyed by `"src_type,rel_type,dst_type"` triplet strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeteroExport {
    /// Per node type, one feature row per node.
    pub node_features: BTreeMap<String, Vec<Vec<f64>>>,
    #[serde(default)]
    pub node_labels: BTreeMap<String, Vec<String>>,
    /// Per edge type, `[[sources...], [targets...]]`.
    pub edge_indices: BTreeMap<String, Vec<Vec<i64>>>,
    #[serde(default)]
    pub edge_features: BTreeMap<String, Vec<Vec<f64>>>,
}

impl HeteroExport {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CYPHER_EXPORT: &str = r#"{
        "nodes": [
            {"id": "n1", "labels": ["person"], "properties": {"label": "Dr. Smith", "age": 52}},
            {"id": 2, "properties": {"title": "Graph Paper"}}
        ],
        "relationships": [
            {"type": "authored", "startNodeId": "n1", "endNodeId": 2, "properties": {"year": 2024}},
            {"startNodeId": "n1", "endNodeId": "missing"}
        ],
        "cypherScript": "CREATE (a:person);\nCREATE (b:paper);"
    }"#;

    #[test]
    fn test_parse_cypher_export() {
        let export = Neo4jExport::from_slice(CYPHER_EXPORT.as_bytes()).unwrap();
        assert_eq!(export.nodes.len(), 2);
        assert_eq!(export.relationships.len(), 2);

        let smith = &export.nodes[0];
        assert_eq!(smith.labels_or_default(), vec!["person"]);
        assert_eq!(smith.display_name(), "Dr. Smith");

        let paper = &export.nodes[1];
        assert_eq!(paper.labels_or_default(), vec!["Node"]);
        assert_eq!(paper.display_name(), "2");

        assert_eq!(export.relationships[0].rel_type, "authored");
        assert_eq!(export.relationships[1].rel_type, "RELATED_TO");
        assert!(export.relationships[1].properties.is_empty());
        assert!(export.script().is_some());
    }

    #[test]
    fn test_blank_script_is_none() {
        let export = Neo4jExport::from_slice(br#"{"cypherScript": "   "}"#).unwrap();
        assert!(export.nodes.is_empty());
        assert!(export.script().is_none());
    }

    #[test]
    fn test_parse_hetero_export_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "nodeFeatures": {{"person": [[1.0, 0.0], [0.5, 0.5]], "paper": [[1.0]]}},
                "nodeLabels": {{"person": ["Ada", "Alan"]}},
                "edgeIndices": {{"person,authored,paper": [[0, 1], [0, 0]]}}
            }}"#
        )
        .unwrap();

        let export = HeteroExport::from_path(file.path()).unwrap();
        assert_eq!(export.node_features["person"].len(), 2);
        assert_eq!(export.node_labels["person"], vec!["Ada", "Alan"]);
        assert_eq!(export.edge_indices["person,authored,paper"][1], vec![0, 0]);
        assert!(export.edge_features.is_empty());
    }

    #[test]
    fn test_hetero_export_requires_edge_indices() {
        let err = HeteroExport::from_slice(br#"{"nodeFeatures": {}}"#).unwrap_err();
        assert!(err.to_string().contains("edgeIndices"));
    }
}
