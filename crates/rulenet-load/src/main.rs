//! CLI entry point for the rulenet-load Neo4j loader.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use rulenet_core::{Neo4jExport, Settings};
use rulenet_graph::{GraphClient, GraphConfig, GraphStats};
use rulenet_load::{guide, LoadReport, Neo4jLoader};

#[derive(Parser)]
#[command(name = "rulenet-load")]
#[command(about = "Load a RuleNet graph export (Neo4j Cypher format) into a Neo4j database")]
#[command(after_help = "Examples:
  rulenet-load graph.json
  rulenet-load graph.json --password mypassword
  rulenet-load graph.json --clear --uri bolt://localhost:7687
  rulenet-load --guide")]
struct Cli {
    /// Path to the exported Neo4j JSON file.
    json_file: Option<PathBuf>,

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

    /// Clear all existing data before loading.
    #[arg(long)]
    clear: bool,

    /// Execute the cypherScript directly instead of node-by-node loading.
    #[arg(long)]
    use_script: bool,

    /// Remove the internal _rulenet_id property after loading.
    #[arg(long)]
    strip_ids: bool,

    /// Show the quick start guide.
    #[arg(long)]
    guide: bool,

    /// Show sample Cypher queries.
    #[arg(long)]
    queries: bool,

    /// Config file prefix (default: rulenet).
    #[arg(short, long, default_value = "rulenet")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if cli.guide {
        println!("{}", guide::QUICK_START);
        return Ok(());
    }
    if cli.queries {
        println!("{}", guide::SAMPLE_QUERIES);
        return Ok(());
    }

    let Some(json_file) = cli.json_file.as_deref() else {
        Cli::command().print_help()?;
        anyhow::bail!("Please provide a JSON file to load (run with --guide for setup instructions)");
    };

    let export = Neo4jExport::from_path(json_file)?;
    println!(
        "Export contains: {} nodes, {} relationships",
        export.nodes.len(),
        export.relationships.len()
    );

    let graph_config = graph_config(&cli)?;
    let graph = GraphClient::connect(&graph_config).await?;
    graph.verify_connectivity().await.map_err(|e| {
        anyhow::anyhow!(
            "{e}\nTroubleshooting:\n  1. Is Neo4j running?\n  2. Is the bolt port correct? (default: 7687)\n  3. Are the credentials correct?"
        )
    })?;
    println!("Connected to Neo4j at {}", graph_config.uri);

    let before = graph.stats().await?;
    println!(
        "Current database: {} nodes, {} relationships",
        before.nodes, before.relationships
    );
    if !before.labels.is_empty() {
        println!("  Labels: {}", before.labels.join(", "));
    }

    if cli.clear {
        graph.clear_database().await?;
        println!("Cleared all existing data from database");
    }

    let loader = Neo4jLoader::new(graph);
    let report = if cli.use_script {
        loader.load_from_script(&export).await?
    } else {
        loader.load_from_export(&export).await?
    };
    print_report(&report);

    let graph = loader.sink();
    if cli.strip_ids {
        let stripped = graph.remove_export_ids().await?;
        println!("Removed internal ids from {stripped} nodes");
    }

    let after = graph.stats().await?;
    print_final_stats(&after);

    Ok(())
}

/// Settings from file/env, overridden by command-line flags.
fn graph_config(cli: &Cli) -> anyhow::Result<GraphConfig> {
    let mut settings = Settings::load(&cli.config)?.neo4j;
    if let Some(uri) = &cli.uri {
        settings.uri = uri.clone();
    }
    if let Some(user) = &cli.user {
        settings.user = user.clone();
    }
    if let Some(password) = &cli.password {
        settings.password = password.clone();
    }
    if let Some(database) = &cli.database {
        settings.database = Some(database.clone());
    }
    Ok(GraphConfig::from(&settings))
}

fn print_report(report: &LoadReport) {
    println!();
    println!("Load run {} ({:?})", report.run_id, report.mode);
    match report.mode {
        rulenet_load::LoadMode::Records => {
            println!("  Nodes created:         {}", report.nodes_created);
            println!("  Node failures:         {}", report.node_failures);
            println!("  Relationships created: {}", report.relationships_created);
            println!("  Relationships skipped: {}", report.relationships_skipped);
            println!("  Relationship failures: {}", report.relationship_failures);
        }
        rulenet_load::LoadMode::Script => {
            println!("  Statements executed:   {}", report.statements_executed);
            println!("  Statement failures:    {}", report.statement_failures);
        }
    }
    if let Some(ms) = report.duration_ms() {
        println!("  Duration:              {ms} ms");
    }
}

fn print_final_stats(stats: &GraphStats) {
    let or_none = |items: &[String]| {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    };

    println!();
    println!("{}", "=".repeat(60));
    println!("Loading complete");
    println!("{}", "=".repeat(60));
    println!("Final database stats:");
    println!("  Nodes: {}", stats.nodes);
    println!("  Relationships: {}", stats.relationships);
    println!("  Labels: {}", or_none(&stats.labels));
    println!(
        "  Relationship Types: {}",
        or_none(&stats.relationship_types)
    );
    println!();
    println!("Open Neo4j Browser: http://localhost:7474");
    println!("  Try: MATCH (n) RETURN n");
}
