use clap::Parser;
use enrich::{AppConfig, UniChemConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "compound-enrich",
    about = "Add UniChem cross-reference ids to drug-gene interaction records"
)]
struct Cli {
    /// Interactions file, one JSON record per line.
    #[arg(long)]
    interactions: Option<PathBuf>,

    /// Output file path. Parent directories are created as needed. Defaults
    /// to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Base URL of the UniChem REST API.
    #[arg(long, env = "UNICHEM_BASE_URL", default_value = resolve::unichem::DEFAULT_BASE_URL)]
    unichem_url: String,

    /// Number of UniChem lookups in flight at once. Output order always
    /// matches input order.
    #[arg(long, env = "ENRICH_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() {
    // stdout carries the records, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.interactions else {
        eprintln!("interactions file must be provided");
        std::process::exit(1);
    };

    let config = AppConfig {
        output: cli.output,
        unichem: UniChemConfig {
            base_url: cli.unichem_url,
        },
        concurrency: cli.concurrency,
        ..AppConfig::new(input)
    };

    match enrich::run(&config).await {
        Ok(summary) => {
            info!(
                records = summary.records_written,
                resolved = summary.resolved,
                degraded = summary.degraded,
                avg_lookup_ms = summary.avg_lookup_time_ms,
                "enrichment complete"
            );
        }
        Err(e) => {
            error!(error = %e, "enrichment aborted");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
