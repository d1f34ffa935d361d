//! Export loading: record-by-record creation or script replay.

use rulenet_core::cypher::{split_script, truncate_for_log};
use rulenet_core::export::value_to_text;
use rulenet_core::Neo4jExport;
use rulenet_graph::mutations::is_usable_id;

use crate::error::{LoadError, Result};
use crate::report::{LoadMode, LoadReport};
use crate::sink::ExportSink;

/// Characters of a failed statement shown in logs.
const STATEMENT_PREVIEW_CHARS: usize = 50;

/// Applies a Cypher-format export to a sink.
pub struct Neo4jLoader<S> {
    sink: S,
}

impl<S: ExportSink> Neo4jLoader<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Create every node, then every relationship.
    ///
    /// A failing record is logged and counted; the run always continues.
    pub async fn load_from_export(&self, export: &Neo4jExport) -> Result<LoadReport> {
        let mut report = LoadReport::new(LoadMode::Records);
        tracing::info!(
            run_id = %report.run_id,
            nodes = export.nodes.len(),
            relationships = export.relationships.len(),
            "Loading export records"
        );

        for node in &export.nodes {
            let labels = node.labels_or_default().join(":");
            match self.sink.create_node(node).await {
                Ok(()) => {
                    report.nodes_created += 1;
                    tracing::debug!(%labels, name = %node.display_name(), "Created node");
                }
                Err(e) => {
                    report.node_failures += 1;
                    tracing::warn!(id = %value_to_text(&node.id), error = %e, "Failed to create node");
                }
            }
        }

        for rel in &export.relationships {
            let start = value_to_text(&rel.start_node_id);
            let end = value_to_text(&rel.end_node_id);

            if !is_usable_id(&rel.start_node_id) || !is_usable_id(&rel.end_node_id) {
                report.relationships_skipped += 1;
                tracing::warn!(rel_type = %rel.rel_type, %start, %end, "Relationship has no usable endpoint ids");
                continue;
            }

            match self.sink.create_relationship(rel).await {
                Ok(true) => {
                    report.relationships_created += 1;
                    tracing::debug!(rel_type = %rel.rel_type, %start, %end, "Created relationship");
                }
                Ok(false) => {
                    report.relationships_skipped += 1;
                    tracing::warn!(rel_type = %rel.rel_type, %start, %end, "Could not find nodes for relationship");
                }
                Err(e) => {
                    report.relationship_failures += 1;
                    tracing::warn!(rel_type = %rel.rel_type, %start, %end, error = %e, "Failed to create relationship");
                }
            }
        }

        let report = report.finish();
        tracing::info!(
            run_id = %report.run_id,
            nodes_created = report.nodes_created,
            relationships_created = report.relationships_created,
            failures = report.total_failures(),
            "Export records loaded"
        );
        Ok(report)
    }

    /// Replay the export's `cypherScript`, one statement at a time.
    pub async fn load_from_script(&self, export: &Neo4jExport) -> Result<LoadReport> {
        let script = export.script().ok_or(LoadError::MissingScript)?;
        let statements = split_script(script);

        let mut report = LoadReport::new(LoadMode::Script);
        tracing::info!(
            run_id = %report.run_id,
            chars = script.len(),
            statements = statements.len(),
            "Executing Cypher script"
        );

        for stmt in &statements {
            match self.sink.execute(stmt).await {
                Ok(()) => report.statements_executed += 1,
                Err(e) => {
                    report.statement_failures += 1;
                    tracing::warn!(
                        statement = %truncate_for_log(stmt, STATEMENT_PREVIEW_CHARS),
                        error = %e,
                        "Error executing statement"
                    );
                }
            }
        }

        let report = report.finish();
        tracing::info!(
            run_id = %report.run_id,
            executed = report.statements_executed,
            failed = report.statement_failures,
            "Cypher script executed"
        );
        Ok(report)
    }
}
