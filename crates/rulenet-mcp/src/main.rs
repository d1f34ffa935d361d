//! stdio entry point for the `graph_search` MCP server.

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use rulenet_core::Settings;
use rulenet_graph::{GraphClient, GraphConfig};
use rulenet_mcp::GraphSearchServer;

#[derive(Parser)]
#[command(name = "rulenet-mcp")]
#[command(about = "Serve read-only Cypher access to a Neo4j graph over MCP (stdio)")]
struct Cli {
    /// Neo4j Bolt URI (default: bolt://localhost:7687).
    #[arg(long)]
    uri: Option<String>,

    /// Neo4j username (default: neo4j).
    #[arg(long)]
    user: Option<String>,

    /// Neo4j password (default: password).
    #[arg(long)]
    password: Option<String>,

    /// Target database (server default when omitted).
    #[arg(long)]
    database: Option<String>,

    /// Config file prefix (default: rulenet).
    #[arg(short, long, default_value = "rulenet")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)?;
    let mut neo4j = settings.neo4j;
    if let Some(uri) = cli.uri {
        neo4j.uri = uri;
    }
    if let Some(user) = cli.user {
        neo4j.user = user;
    }
    if let Some(password) = cli.password {
        neo4j.password = password;
    }
    if let Some(database) = cli.database {
        neo4j.database = Some(database);
    }

    let graph = GraphClient::connect(&GraphConfig::from(&neo4j)).await?;
    graph.verify_connectivity().await?;
    tracing::info!(uri = %neo4j.uri, "Connected to Neo4j");

    let server = GraphSearchServer::new(graph, settings.mcp);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to start MCP server");
    })?;
    tracing::info!("graph_search MCP server running on stdio");

    service.waiting().await?;
    tracing::info!("Server shut down");
    Ok(())
}
