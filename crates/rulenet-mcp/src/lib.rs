//! Read-only graph query server speaking the Model Context Protocol.
//!
//! Exposes schema introspection, statistics, node sampling and guarded
//! Cypher execution over one shared Neo4j connection pool.

pub mod prompt;
pub mod server;

pub use server::GraphSearchServer;
