//! Shared data model for the LogForge pipeline.
//!
//! The record types here are produced by `lf-ingest` and consumed by every
//! pipeline stage and sink, so they live in their own dependency-light crate.

pub mod record;
pub mod stats;

pub use record::{LogLevel, LogRecord};
pub use stats::{Statistics, TimeRange};
