//! CLI entry point for the rulenet-hetero graph converter.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use rulenet_core::HeteroExport;
use rulenet_hetero::HeteroGraph;

#[derive(Parser)]
#[command(name = "rulenet-hetero")]
#[command(about = "Load a heterogeneous graph from a RuleNet tensor-format export")]
struct Cli {
    /// Path to the exported JSON file.
    json_file: PathBuf,

    /// Save a binary snapshot for faster loading.
    #[arg(long, value_name = "OUTPUT_PATH")]
    save: Option<PathBuf>,

    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the edge index bounds check.
    #[arg(long)]
    no_validate: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    tracing::info!(path = %cli.json_file.display(), "Loading graph");
    let export = HeteroExport::from_path(&cli.json_file)?;
    let graph = HeteroGraph::from_export(&export)?;

    if !cli.no_validate {
        graph.validate()?;
    }

    let summary = graph.summary();
    match cli.format {
        OutputFormat::Text => println!("\n{summary}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if let Some(out) = &cli.save {
        graph.save(out)?;
        match cli.format {
            OutputFormat::Text => write_save_hint(&mut io::stdout().lock(), out)?,
            OutputFormat::Json => write_save_hint(&mut io::stderr().lock(), out)?,
        }
    }

    Ok(())
}

/// Save confirmation and reload hint. Text output prints it on stdout after
/// the summary; with `--format json` it goes to stderr so stdout stays a
/// single JSON document.
fn write_save_hint(w: &mut impl Write, out: &Path) -> io::Result<()> {
    writeln!(w, "\nSaved to: {}", out.display())?;
    writeln!(w, "Load with: HeteroGraph::load({:?})", out.display().to_string())
}
