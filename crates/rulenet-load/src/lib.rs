//! rulenet-load: Load Cypher-format graph exports into Neo4j.
//!
//! Nodes and relationships are created record by record (failures are
//! counted, not fatal), or the export's embedded Cypher script is replayed
//! statement by statement.

pub mod error;
pub mod guide;
pub mod loader;
pub mod report;
pub mod sink;

pub use error::LoadError;
pub use loader::Neo4jLoader;
pub use report::{LoadMode, LoadReport};
pub use sink::ExportSink;
