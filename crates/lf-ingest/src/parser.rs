//! Single-line log parsing with severity filtering.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

use lf_records::{LogLevel, LogRecord};

// Expected shape: <ISO-8601-seconds> <LEVEL> <category>: <message>
static RE_LOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})\s+(\w+)\s+([^:]+):\s+(.*)").unwrap()
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse one log line into a record, stamping the given provenance.
///
/// Returns `None` unless the trimmed line structurally matches the expected
/// shape, the level token is exactly `WARNING` or `ERROR`, and the timestamp
/// digits form a real calendar datetime. Malformed lines are skipped, never
/// reported as errors.
pub fn parse_line(line: &str, source_file: &str, line_number: usize) -> Option<LogRecord> {
    let line = line.trim();
    let caps = RE_LOG_LINE.captures(line)?;
    let level = LogLevel::parse_token(&caps[2])?;
    let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT)
        .ok()?
        .and_utc();
    Some(LogRecord {
        timestamp,
        level,
        category: caps[3].to_string(),
        message: caps[4].to_string(),
        generalized_message: None,
        source_file: source_file.to_string(),
        line_number,
        raw_line: line.to_string(),
    })
}
