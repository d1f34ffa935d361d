//! Error types for the rulenet-load crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No cypherScript found in export")]
    MissingScript,

    #[error("Export error: {0}")]
    Export(#[from] rulenet_core::RuleNetError),

    #[error("Graph error: {0}")]
    Graph(#[from] rulenet_graph::GraphError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
