//! rulenet-core: Shared types, configuration, and error handling for the RuleNet graph tools.
//!
//! This crate provides the foundations used by the loader, converter, and query server:
//! - Export document types (Cypher-format and tensor-format JSON exports)
//! - Cypher text helpers (identifier quoting, script splitting, read-only guard)
//! - Layered configuration
//! - Common error type

pub mod config;
pub mod cypher;
pub mod error;
pub mod export;

pub use config::{McpSettings, Neo4jSettings, Settings};
pub use error::RuleNetError;
pub use export::{ExportNode, ExportRelationship, HeteroExport, Neo4jExport};
