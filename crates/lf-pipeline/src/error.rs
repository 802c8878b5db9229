//! Pipeline error types.

use thiserror::Error;

/// Stage-fatal pipeline errors.
///
/// Per-file and per-sink faults never surface here; those are isolated
/// and logged where they occur. Anything that does reach this type fails
/// its stage and therefore the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("ingest error: {0}")]
    Ingest(#[from] lf_ingest::IngestError),

    #[error("delimited sink error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet sink error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for pipeline results.
pub type PipelineResult<T> = Result<T, PipelineError>;
