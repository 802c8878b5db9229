//! Extraction machinery for the LogForge pipeline.
//!
//! Provides the single-line log parser with severity filtering, the message
//! generalizer that masks volatile tokens into stable templates, the per-file
//! ingest worker with failure isolation, and the parallel dispatch layer that
//! fans the worker out across files and merges results into one time-ordered
//! record set.

pub mod dispatch;
pub mod error;
pub mod generalize;
pub mod parser;
pub mod worker;

// Re-export key entry points for convenience
pub use dispatch::{DispatchStrategy, parse_files};
pub use error::{IngestError, IngestResult};
pub use generalize::generalize;
pub use parser::parse_line;
pub use worker::ingest_file;
