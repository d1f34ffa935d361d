//! Read operations: database statistics, schema introspection, and
//! row-to-JSON reads for the query server.

use neo4rs::query;
use serde::{Deserialize, Serialize};

use rulenet_core::cypher::quote_identifier;

use crate::client::{GraphClient, GraphError};

/// Current database statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: i64,
    pub relationships: i64,
    pub labels: Vec<String>,
    pub relationship_types: Vec<String>,
}

impl GraphClient {
    // ── Counts ───────────────────────────────────────────────────

    pub async fn count_nodes(&self) -> Result<i64, GraphError> {
        self.count("MATCH (n) RETURN count(n) AS cnt").await
    }

    pub async fn count_relationships(&self) -> Result<i64, GraphError> {
        self.count("MATCH ()-[r]->() RETURN count(r) AS cnt").await
    }

    async fn count(&self, cypher: &str) -> Result<i64, GraphError> {
        match self.query_one(query(cypher)).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }

    /// Node/relationship counts plus label and relationship type names.
    pub async fn stats(&self) -> Result<GraphStats, GraphError> {
        Ok(GraphStats {
            nodes: self.count_nodes().await?,
            relationships: self.count_relationships().await?,
            labels: self.labels().await?,
            relationship_types: self.relationship_types().await?,
        })
    }

    // ── Schema ───────────────────────────────────────────────────

    /// All node labels, sorted.
    pub async fn labels(&self) -> Result<Vec<String>, GraphError> {
        self.string_column(
            "CALL db.labels() YIELD label RETURN label ORDER BY label",
            "label",
        )
        .await
    }

    /// All relationship types, sorted.
    pub async fn relationship_types(&self) -> Result<Vec<String>, GraphError> {
        self.string_column(
            "CALL db.relationshipTypes() YIELD relationshipType
             RETURN relationshipType ORDER BY relationshipType",
            "relationshipType",
        )
        .await
    }

    /// All property keys in use, sorted.
    pub async fn property_keys(&self) -> Result<Vec<String>, GraphError> {
        self.string_column(
            "CALL db.propertyKeys() YIELD propertyKey RETURN propertyKey ORDER BY propertyKey",
            "propertyKey",
        )
        .await
    }

    /// Property keys seen on a sample of nodes with `label`, most frequent first.
    pub async fn label_property_keys(
        &self,
        label: &str,
        sample_size: u32,
        cap: usize,
    ) -> Result<Vec<String>, GraphError> {
        let label = quote_identifier(label)?;
        let cypher = format!(
            "MATCH (n:{label})
             WITH n LIMIT $sample
             UNWIND keys(n) AS k
             RETURN k, count(*) AS c
             ORDER BY c DESC, k"
        );
        let q = query(&cypher).param("sample", sample_size as i64);

        let rows = self.query_rows(q).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get::<String>("k").ok())
            .take(cap)
            .collect())
    }

    async fn string_column(&self, cypher: &str, column: &str) -> Result<Vec<String>, GraphError> {
        let rows = self.query_rows(query(cypher)).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get::<String>(column).ok())
            .collect())
    }

    // ── Node Reads ───────────────────────────────────────────────

    /// Property maps of up to `limit` nodes with `label`.
    pub async fn sample_nodes(
        &self,
        label: &str,
        limit: u32,
    ) -> Result<Vec<serde_json::Value>, GraphError> {
        let label = quote_identifier(label)?;
        let cypher = format!(
            "MATCH (n:{label})
             RETURN n{{.*}} AS node
             LIMIT $limit"
        );
        let q = query(&cypher).param("limit", limit as i64);

        let rows = self.query_rows(q).await?;
        let mut nodes = Vec::with_capacity(rows.len());
        for row in rows {
            let node: serde_json::Value = row.get("node").map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize node: {e}"))
            })?;
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Run an arbitrary query and return each row as a JSON object keyed by column.
    pub async fn read_rows(&self, cypher: &str) -> Result<Vec<serde_json::Value>, GraphError> {
        let rows = self.query_rows(query(cypher)).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value: serde_json::Value = row.to().map_err(|e| {
                GraphError::Serialization(format!("Failed to deserialize row: {e}"))
            })?;
            results.push(value);
        }
        Ok(results)
    }
}
