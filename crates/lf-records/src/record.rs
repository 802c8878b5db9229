//! Log record and severity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Log Level ─────────────────────────────────────────────────

/// Severity of an anomaly-relevant log entry.
///
/// Only `WARNING` and `ERROR` lines survive ingest; other levels are
/// filtered at the parser and never materialize as records, so they have
/// no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Match a raw level token from a log line. Case-sensitive: `Error`,
    /// `warning`, `INFO` etc. all return `None`.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Log Record ────────────────────────────────────────────────

/// One anomaly-relevant log entry with its provenance.
///
/// Built only by the line parser; immutable afterwards except for
/// `generalized_message`, which the transform stage fills in once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event time from the line itself (not ingest time).
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Subsystem tag, everything before the first colon.
    pub category: String,
    /// Free-text message body.
    pub message: String,
    /// Classifier-ready template derived from `message` during transform.
    pub generalized_message: Option<String>,
    /// Base name of the file this record came from.
    pub source_file: String,
    /// 1-based line number within `source_file`.
    pub line_number: usize,
    /// The original line, trimmed.
    pub raw_line: String,
}

impl LogRecord {
    /// Global ordering key: timestamp ascending, with (file, line) as a
    /// deterministic tie-break so merge order never depends on task
    /// completion order.
    pub fn sort_key(&self) -> (DateTime<Utc>, &str, usize) {
        (self.timestamp, self.source_file.as_str(), self.line_number)
    }
}
