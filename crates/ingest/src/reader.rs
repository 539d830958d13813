use anyhow::{Context, Result};
use futures::stream::{self, Stream};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::record::InteractionRecord;

pub struct RecordReader;

impl RecordReader {
    /// Open a newline-delimited interactions file for streaming.
    pub async fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .await
            .context(format!("Failed to open interactions file: {:?}", path))?;
        Ok(BufReader::new(file))
    }
}

/// Parse a single input line into an [`InteractionRecord`].
pub fn parse_record(line: &str) -> Result<InteractionRecord> {
    let record = serde_json::from_str(line)?;
    Ok(record)
}

/// Stream records from `reader`, one per line, in order.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Invalid UTF-8 is
/// replaced with U+FFFD rather than rejected. Read and parse failures are
/// yielded in place, tagged with the 1-based line number; consumers are
/// expected to stop at the first error.
pub fn records<R>(reader: R) -> impl Stream<Item = Result<InteractionRecord>>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold((reader.split(b'\n'), 0usize), |(mut lines, line_no)| async move {
        let line_no = line_no + 1;
        let item = match lines.next_segment().await {
            Ok(Some(mut bytes)) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                parse_record(&String::from_utf8_lossy(&bytes))
                    .with_context(|| format!("Invalid interaction record on line {}", line_no))
            }
            Ok(None) => return None,
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to read input line {}", line_no))),
        };
        Some((item, (lines, line_no)))
    })
}
