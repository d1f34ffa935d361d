//! RuleNet Graph — Neo4j client for exported knowledge graphs.
//!
//! All database access from the loader and the query server flows through
//! this crate: connection management, export writes, and schema/read queries.

pub mod bolt;
pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use queries::GraphStats;
