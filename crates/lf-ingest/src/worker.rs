//! Per-file ingest worker with failure isolation.

use std::path::Path;

use lf_records::LogRecord;

use crate::parser;

/// Fast pre-filter applied to the raw line before full parsing.
const INFO_MARKER: &str = " INFO ";

/// Read one log file and parse its anomaly-relevant lines.
///
/// Output preserves file-local line order. Any read failure (missing file,
/// permissions, invalid UTF-8) is logged and yields an empty set: one bad
/// file never aborts the batch.
pub async fn ingest_file(path: &Path) -> Vec<LogRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(file = %file_name, error = %e, "skipping unreadable log file");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.contains(INFO_MARKER) {
            continue;
        }
        if let Some(record) = parser::parse_line(line, &file_name, idx + 1) {
            records.push(record);
        }
    }
    tracing::debug!(file = %file_name, records = records.len(), "file ingested");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_records::LogLevel;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    const SAMPLE: &str = "\
2025-01-01T10:00:00 INFO Boot: system started
2025-01-01T10:00:05 ERROR DiskIO: Failure at 192.168.1.5 code 0x1F after 3 retries
garbage line
2025-01-01T10:00:07 WARNING Memory: usage at 91%
2025-13-01T10:00:09 ERROR DiskIO: impossible month
";

    #[tokio::test]
    async fn ingests_warning_and_error_lines_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "app.txt", SAMPLE.as_bytes());
        let records = ingest_file(&path).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Error);
        assert_eq!(records[0].line_number, 2);
        assert_eq!(records[1].level, LogLevel::Warning);
        assert_eq!(records[1].line_number, 4);
    }

    #[tokio::test]
    async fn stamps_base_name_not_full_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "nested.txt",
            b"2025-01-01T10:00:05 ERROR Net: down\n",
        );
        let records = ingest_file(&path).await;
        assert_eq!(records[0].source_file, "nested.txt");
    }

    #[tokio::test]
    async fn info_marker_skips_line_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        // Level position says ERROR, but the INFO marker elsewhere wins
        let path = write_file(
            &dir,
            "a.txt",
            b"2025-01-01T10:00:05 ERROR Net: mentions INFO in message\n",
        );
        let records = ingest_file(&path).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let records = ingest_file(&dir.path().join("does_not_exist.txt")).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn invalid_utf8_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "binary.txt", &[0xff, 0xfe, 0x00, 0x41]);
        let records = ingest_file(&path).await;
        assert!(records.is_empty());
    }
}
