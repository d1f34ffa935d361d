//! Write target for the loader.
//!
//! `GraphClient` is the production sink; tests substitute an in-memory one.

use rulenet_core::{ExportNode, ExportRelationship};
use rulenet_graph::{GraphClient, GraphError};

/// Anything the loader can write export records into.
#[allow(async_fn_in_trait)]
pub trait ExportSink {
    async fn create_node(&self, node: &ExportNode) -> Result<(), GraphError>;

    /// Returns `false` when an endpoint could not be found.
    async fn create_relationship(&self, rel: &ExportRelationship) -> Result<bool, GraphError>;

    async fn execute(&self, statement: &str) -> Result<(), GraphError>;
}

impl ExportSink for GraphClient {
    async fn create_node(&self, node: &ExportNode) -> Result<(), GraphError> {
        self.create_export_node(node).await
    }

    async fn create_relationship(&self, rel: &ExportRelationship) -> Result<bool, GraphError> {
        self.create_export_relationship(rel).await
    }

    async fn execute(&self, statement: &str) -> Result<(), GraphError> {
        self.execute_statement(statement).await
    }
}
