//! LogForge pipeline orchestration: Extract → Transform → Load.
//!
//! `Pipeline::run` drives the three stages under lifecycle tracking and
//! always returns a `RunReport` whose per-stage statuses are truthful,
//! whether or not the run as a whole succeeded.

pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod sinks;
pub mod stage;
pub mod transform;

// Re-export key types for convenience
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use extract::{ExtractResult, SourceType};
pub use load::{LoadReport, LoadStatus, SinkKind, SinkRequest};
pub use stage::{StageReport, StageStatus};
pub use transform::TransformResult;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use lf_records::Statistics;

/// Terminal outcome of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

/// The run result document: overall outcome plus every stage's report and
/// the artifacts of the stages that completed.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub stages: Vec<StageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<ExtractResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadReport>,
}

/// One ETL invocation: owns its configuration, produces one `RunReport`.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run Extract → Transform → Load over `source`, writing to the
    /// requested sinks.
    ///
    /// A stage failure leaves later stages Pending and marks the run
    /// Failed; artifacts of stages that completed are still reported.
    pub async fn run(&self, source: &Path, sinks: SinkRequest) -> RunReport {
        let started_at = Utc::now();
        tracing::info!(source = %source.display(), sinks = ?sinks, "pipeline starting");

        let mut extract_stage = stage::StageReport::new("extract");
        let mut transform_stage = stage::StageReport::new("transform");
        let mut load_stage = stage::StageReport::new("load");
        let mut error: Option<String> = None;

        let extract_result = match extract_stage
            .run(extract::run(&self.config, source))
            .await
        {
            Ok(result) => Some(result),
            Err(e) => {
                error = Some(e.to_string());
                None
            }
        };

        let transform_result = match &extract_result {
            Some(extract_result) => {
                match transform_stage
                    .run(transform::run(&self.config, extract_result))
                    .await
                {
                    Ok(result) => Some(result),
                    Err(e) => {
                        error = Some(e.to_string());
                        None
                    }
                }
            }
            None => None,
        };

        let load_result = match &transform_result {
            Some(transform_result) => {
                match load_stage
                    .run(load::run(&self.config, transform_result, sinks))
                    .await
                {
                    Ok(result) => Some(result),
                    Err(e) => {
                        error = Some(e.to_string());
                        None
                    }
                }
            }
            None => None,
        };

        let completed_at = Utc::now();
        let status = if error.is_none() {
            RunStatus::Success
        } else {
            RunStatus::Failed
        };
        let duration_secs = (completed_at - started_at).num_milliseconds() as f64 / 1000.0;
        tracing::info!(status = ?status, duration_secs, "pipeline finished");

        RunReport {
            status,
            error,
            started_at,
            completed_at,
            duration_secs,
            stages: vec![extract_stage, transform_stage, load_stage],
            extract: extract_result,
            stats: transform_result.map(|t| t.stats),
            load: load_result,
        }
    }
}
