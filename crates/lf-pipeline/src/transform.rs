//! Transform stage: parallel parse fan-out, message generalization, and
//! aggregate statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lf_ingest::{generalize, parse_files};
use lf_records::{LogRecord, Statistics};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::extract::ExtractResult;

/// Outcome of the transform stage: the finalized, time-ordered record set
/// plus its statistics.
#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub records: Vec<LogRecord>,
    pub stats: Statistics,
    pub transformed_at: DateTime<Utc>,
}

/// Parse all discovered files in parallel, fill in generalized messages,
/// and compute statistics. An empty file set yields an empty record set
/// and zeroed stats, not an error.
pub async fn run(
    config: &PipelineConfig,
    extract: &ExtractResult,
) -> PipelineResult<TransformResult> {
    let mut records = parse_files(&extract.log_files, config.dispatch, config.concurrency).await?;

    for record in &mut records {
        record.generalized_message = Some(generalize(&record.message));
    }

    let stats = Statistics::compute(&records);
    tracing::info!(
        total = stats.total,
        errors = stats.error_count,
        warnings = stats.warning_count,
        files = stats.unique_file_count,
        "transform complete"
    );

    Ok(TransformResult {
        records,
        stats,
        transformed_at: Utc::now(),
    })
}
