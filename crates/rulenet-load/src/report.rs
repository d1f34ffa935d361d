//! Load run statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the export was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Node-by-node and relationship-by-relationship.
    Records,
    /// Replay of the embedded Cypher script.
    Script,
}

/// Outcome of one load run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub run_id: Uuid,
    pub mode: LoadMode,
    pub nodes_created: u64,
    pub node_failures: u64,
    pub relationships_created: u64,
    /// Relationships whose endpoints were not found.
    pub relationships_skipped: u64,
    pub relationship_failures: u64,
    pub statements_executed: u64,
    pub statement_failures: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl LoadReport {
    pub fn new(mode: LoadMode) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            mode,
            nodes_created: 0,
            node_failures: 0,
            relationships_created: 0,
            relationships_skipped: 0,
            relationship_failures: 0,
            statements_executed: 0,
            statement_failures: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn total_failures(&self) -> u64 {
        self.node_failures + self.relationship_failures + self.statement_failures
    }

    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}
