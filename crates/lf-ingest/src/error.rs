//! Ingest error types.

use thiserror::Error;

/// Errors that can occur during parallel ingest.
///
/// Per-file read failures are deliberately absent; the worker isolates
/// those and contributes zero records instead of failing the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("worker task failed: {0}")]
    Join(String),
}

/// Convenience alias for ingest results.
pub type IngestResult<T> = Result<T, IngestError>;
