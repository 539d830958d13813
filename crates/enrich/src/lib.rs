pub mod config;
pub mod metrics;
pub mod pipeline;

pub use config::{AppConfig, UniChemConfig};
pub use metrics::{RunStats, RunSummary};
pub use pipeline::Pipeline;

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWrite;
use tracing::{debug, info};

pub type OutputSink = Box<dyn AsyncWrite + Unpin + Send>;

/// Open the output destination, creating parent directories for a file.
/// `None` means stdout.
pub async fn open_output(path: Option<&Path>) -> Result<OutputSink> {
    let Some(path) = path else {
        return Ok(Box::new(tokio::io::stdout()));
    };

    let path = std::path::absolute(path)
        .context(format!("Failed to resolve output path: {:?}", path))?;
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .context(format!("Failed to create output directory: {:?}", dir))?;
    }
    let file = File::create(&path)
        .await
        .context(format!("Failed to create output file: {:?}", path))?;
    info!(path = %path.display(), "writing compound ids to file");
    Ok(Box::new(file))
}

/// Enrich every record in `config.input` and write the compound ids.
pub async fn run(config: &AppConfig) -> Result<RunSummary> {
    config.validate()?;
    debug!(
        config = %serde_json::to_string(config).unwrap_or_default(),
        "starting enrichment"
    );

    let input = ingest::RecordReader::open(&config.input).await?;
    let mut output = open_output(config.output.as_deref()).await?;

    let client = resolve::UniChemClient::new(config.unichem.base_url.clone());
    let pipeline = Pipeline::new(client, config.concurrency, RunStats::new());

    pipeline.run(input, &mut output).await
}
