use anyhow::{Context, Result};
use futures::StreamExt;
use resolve::{CompoundIds, Resolution, UniChemClient};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::metrics::{RunStats, RunSummary, TimedOperation};

/// Streams interaction records through UniChem, one output line per input
/// line, in input order.
pub struct Pipeline {
    client: UniChemClient,
    concurrency: usize,
    stats: Arc<RunStats>,
}

impl Pipeline {
    pub fn new(client: UniChemClient, concurrency: usize, stats: Arc<RunStats>) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
            stats,
        }
    }

    pub fn stats(&self) -> &Arc<RunStats> {
        &self.stats
    }

    /// Run the whole input through the resolver.
    ///
    /// A bad input line or a write failure aborts the run. Lookup failures do
    /// not: the chembl-only record is written and a warning logged. `output`
    /// is flushed before returning on every path.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let processed = self.process(input, output).await;
        let flushed = output.flush().await.context("Failed to flush output");
        processed?;
        flushed?;
        Ok(self.stats.snapshot())
    }

    async fn process<R, W>(&self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let client = &self.client;
        let stats = &self.stats;

        // `buffered` keeps up to `concurrency` lookups in flight but yields
        // them in input order.
        let resolved = ingest::records(input)
            .map(|record| async move {
                let record = record?;
                let timer = TimedOperation::start();
                let resolution = client.resolve(record.chembl_id()).await;
                stats.record_lookup(timer.elapsed(), resolution.is_ok());
                Ok::<Resolution, anyhow::Error>(resolution)
            })
            .buffered(self.concurrency);
        let mut resolved = std::pin::pin!(resolved);

        while let Some(resolution) = resolved.next().await {
            let resolution = resolution?;
            if let Some(e) = &resolution.error {
                warn!(
                    chembl_id = %resolution.ids.chembl,
                    error = %e,
                    "UniChem lookup failed, writing chembl-only record"
                );
            }
            write_record(output, &resolution.ids).await?;
            self.stats.record_written();
            debug!(chembl_id = %resolution.ids.chembl, "record written");
        }

        Ok(())
    }
}

async fn write_record<W>(output: &mut W, ids: &CompoundIds) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(ids).context("Failed to encode compound ids")?;
    line.push(b'\n');
    output
        .write_all(&line)
        .await
        .context("Failed to write output record")?;
    output.flush().await.context("Failed to flush output record")?;
    Ok(())
}
