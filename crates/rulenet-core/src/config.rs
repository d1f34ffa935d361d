//! Configuration management for the RuleNet graph tools.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`RULENET__` prefix, `__` separator,
//!    e.g. `RULENET__NEO4J__PASSWORD`)
//! 2. Config file (`rulenet.toml`, or the prefix given with `--config`)
//! 3. Defaults
//!
//! Command-line flags are applied on top by each binary.

use serde::Deserialize;

use crate::error::Result;

/// Top-level settings shared by all binaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: Neo4jSettings,
    #[serde(default)]
    pub mcp: McpSettings,
}

/// Neo4j connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    /// Target database; the server default when unset.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// Limits applied by the graph query server's tools.
#[derive(Debug, Clone, Deserialize)]
pub struct McpSettings {
    /// LIMIT appended to agent queries that have none.
    #[serde(default = "default_row_limit")]
    pub default_row_limit: u32,
    /// Upper bound for `sample_nodes`.
    #[serde(default = "default_sample_limit_max")]
    pub sample_limit_max: u32,
    /// Labels whose properties are sampled by `get_graph_schema`.
    #[serde(default = "default_schema_label_cap")]
    pub schema_label_cap: usize,
    /// Nodes inspected per label when sampling properties.
    #[serde(default = "default_schema_sample_size")]
    pub schema_sample_size: u32,
    /// Property keys reported per label.
    #[serde(default = "default_schema_property_cap")]
    pub schema_property_cap: usize,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_row_limit() -> u32 {
    25
}

fn default_sample_limit_max() -> u32 {
    100
}

fn default_schema_label_cap() -> usize {
    30
}

fn default_schema_sample_size() -> u32 {
    50
}

fn default_schema_property_cap() -> usize {
    20
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for McpSettings {
    fn default() -> Self {
        Self {
            default_row_limit: default_row_limit(),
            sample_limit_max: default_sample_limit_max(),
            schema_label_cap: default_schema_label_cap(),
            schema_sample_size: default_schema_sample_size(),
            schema_property_cap: default_schema_property_cap(),
        }
    }
}

impl Settings {
    /// Load settings from `<file_prefix>.{toml,yaml,json}` and the environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("RULENET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(uri = %settings.neo4j.uri, user = %settings.neo4j.user, "Settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j.user, "neo4j");
        assert_eq!(settings.neo4j.password, "password");
        assert!(settings.neo4j.database.is_none());
        assert_eq!(settings.mcp.default_row_limit, 25);
        assert_eq!(settings.mcp.schema_label_cap, 30);
        assert_eq!(settings.mcp.schema_property_cap, 20);
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rulenet-test.toml"),
            "[neo4j]\nuri = \"bolt://graph.internal:7687\"\n\n[mcp]\ndefault_row_limit = 10\n",
        )
        .unwrap();

        let prefix = dir.path().join("rulenet-test");
        let settings = Settings::load(prefix.to_str().unwrap()).unwrap();

        assert_eq!(settings.neo4j.uri, "bolt://graph.internal:7687");
        assert_eq!(settings.neo4j.user, "neo4j");
        assert_eq!(settings.mcp.default_row_limit, 10);
        assert_eq!(settings.mcp.sample_limit_max, 100);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let settings = Settings::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(settings.mcp.schema_sample_size, 50);
    }
}
