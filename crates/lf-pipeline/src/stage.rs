//! Stage lifecycle tracking: pending → running → {completed | failed}.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::PipelineResult;

/// Lifecycle state of one pipeline stage. Completed and Failed are
/// terminal; a report is never reused across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Status, timing, and failure record for one stage of one run.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub name: &'static str,
    pub status: StageStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageReport {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: StageStatus::Pending,
            started_at: None,
            ended_at: None,
            error: None,
        }
    }

    /// Execute a stage future under lifecycle tracking.
    ///
    /// Records start/end times and the terminal status, then hands the
    /// result back unchanged: a stage failure is recorded here but still
    /// propagates to the caller.
    pub async fn run<T, F>(&mut self, stage: F) -> PipelineResult<T>
    where
        F: Future<Output = PipelineResult<T>>,
    {
        self.started_at = Some(Utc::now());
        self.status = StageStatus::Running;
        tracing::info!(stage = self.name, "stage started");

        let result = stage.await;
        self.ended_at = Some(Utc::now());
        match &result {
            Ok(_) => {
                self.status = StageStatus::Completed;
                tracing::info!(
                    stage = self.name,
                    duration_secs = self.duration_secs(),
                    "stage completed"
                );
            }
            Err(e) => {
                self.status = StageStatus::Failed;
                self.error = Some(e.to_string());
                tracing::error!(stage = self.name, error = %e, "stage failed");
            }
        }
        result
    }

    /// Wall-clock seconds spent in the stage; zero until it has finished.
    pub fn duration_secs(&self) -> f64 {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => (end - start).num_milliseconds() as f64 / 1000.0,
            _ => 0.0,
        }
    }
}
