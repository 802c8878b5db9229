//! Parallel fan-out over log files with a deterministic merge.

use std::path::PathBuf;

use futures::StreamExt;
use serde::{Deserialize, Serialize};

use lf_records::LogRecord;

use crate::error::{IngestError, IngestResult};
use crate::worker;

/// How the per-file fan-out is scheduled. Both strategies produce an
/// identical record set for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStrategy {
    /// One spawned task per file, gathered in submission order.
    #[default]
    TaskPerFile,
    /// Bounded streaming map-then-flatten over the file list.
    Streaming,
}

/// Fan the ingest worker out across `files` and return one globally
/// time-ordered record set.
///
/// Workers share no mutable state and run to completion once dispatched.
/// The merge is a full barrier: every worker's output is collected before
/// the final sort, so record order depends on the sort key (timestamp,
/// file, line) and never on task completion order. Zero files yields an
/// empty set, not an error.
pub async fn parse_files(
    files: &[PathBuf],
    strategy: DispatchStrategy,
    concurrency: usize,
) -> IngestResult<Vec<LogRecord>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = match strategy {
        DispatchStrategy::TaskPerFile => gather_task_per_file(files).await?,
        DispatchStrategy::Streaming => gather_streaming(files, concurrency).await,
    };
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    tracing::info!(
        files = files.len(),
        records = records.len(),
        strategy = ?strategy,
        "fan-out complete"
    );
    Ok(records)
}

async fn gather_task_per_file(files: &[PathBuf]) -> IngestResult<Vec<LogRecord>> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { worker::ingest_file(&path).await }))
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let file_records = handle
            .await
            .map_err(|e| IngestError::Join(e.to_string()))?;
        all.extend(file_records);
    }
    Ok(all)
}

async fn gather_streaming(files: &[PathBuf], concurrency: usize) -> Vec<LogRecord> {
    futures::stream::iter(files.iter().cloned())
        .map(|path| async move { worker::ingest_file(&path).await })
        .buffered(concurrency.max(1))
        .concat()
        .await
}
