//! Aggregate statistics over a finalized record set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::record::{LogLevel, LogRecord};

/// Observed event-time span of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Summary counters computed once from the final record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub unique_file_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

impl Statistics {
    /// Compute aggregates. An empty record set yields zeroed counters and
    /// no time range.
    pub fn compute(records: &[LogRecord]) -> Self {
        let error_count = records
            .iter()
            .filter(|r| r.level == LogLevel::Error)
            .count();
        let warning_count = records
            .iter()
            .filter(|r| r.level == LogLevel::Warning)
            .count();
        let unique_file_count = records
            .iter()
            .map(|r| r.source_file.as_str())
            .collect::<HashSet<_>>()
            .len();
        let start = records.iter().map(|r| r.timestamp).min();
        let end = records.iter().map(|r| r.timestamp).max();
        Self {
            total: records.len(),
            error_count,
            warning_count,
            unique_file_count,
            time_range: start.zip(end).map(|(start, end)| TimeRange { start, end }),
        }
    }
}
