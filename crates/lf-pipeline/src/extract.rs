//! Extract stage: discover log files from a directory, single file, or
//! zip archive.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};

/// Known classification knowledge file names, in priority order. Located
/// here but consumed downstream, never parsed by the pipeline itself.
const KNOWLEDGE_FILE_NAMES: [&str; 2] = ["anomalies_problems.csv", "anomalies_problems.xlsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Zip,
    Directory,
    File,
}

/// Outcome of the extract stage, handed to transform and to the run report.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResult {
    pub source_type: SourceType,
    pub source_path: PathBuf,
    /// Directory the discovered files live under (the extraction target
    /// for archive sources).
    pub scan_dir: PathBuf,
    pub log_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_file: Option<PathBuf>,
    pub files_count: usize,
    pub extracted_at: DateTime<Utc>,
}

/// Discover log files from the given source.
///
/// Zero matching files is a valid outcome; an unrecognized source path is
/// a stage failure.
pub async fn run(config: &PipelineConfig, source: &Path) -> PipelineResult<ExtractResult> {
    tracing::info!(source = %source.display(), "extract starting");
    if source.is_file()
        && source
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
    {
        extract_archive(config, source)
    } else if source.is_dir() {
        scan_directory(config, source, SourceType::Directory, source)
    } else if source.is_file() {
        single_file(source)
    } else {
        Err(PipelineError::UnsupportedSource(
            source.display().to_string(),
        ))
    }
}

/// Unpack a zip archive into a run-stamped temp directory, then scan it
/// like any other directory.
fn extract_archive(config: &PipelineConfig, source: &Path) -> PipelineResult<ExtractResult> {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let target = config.temp_dir.join(format!("extract_{stamp}"));
    std::fs::create_dir_all(&target)?;

    let mut archive = zip::ZipArchive::new(File::open(source)?)?;
    archive.extract(&target)?;
    tracing::info!(
        archive = %source.display(),
        entries = archive.len(),
        target = %target.display(),
        "archive extracted"
    );

    scan_directory(config, &target, SourceType::Zip, source)
}

fn scan_directory(
    config: &PipelineConfig,
    dir: &Path,
    source_type: SourceType,
    source_path: &Path,
) -> PipelineResult<ExtractResult> {
    let mut log_files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    config
                        .log_extensions
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                })
        })
        .map(|entry| entry.into_path())
        .collect();
    log_files.sort();

    let kb_file = locate_knowledge_file(dir);
    tracing::info!(
        dir = %dir.display(),
        files = log_files.len(),
        kb_file = kb_file.is_some(),
        "log files discovered"
    );

    Ok(ExtractResult {
        source_type,
        source_path: source_path.to_path_buf(),
        scan_dir: dir.to_path_buf(),
        files_count: log_files.len(),
        log_files,
        kb_file,
        extracted_at: Utc::now(),
    })
}

fn single_file(source: &Path) -> PipelineResult<ExtractResult> {
    tracing::info!(file = %source.display(), "single-file source");
    let scan_dir = source
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok(ExtractResult {
        source_type: SourceType::File,
        source_path: source.to_path_buf(),
        scan_dir,
        log_files: vec![source.to_path_buf()],
        kb_file: None,
        files_count: 1,
        extracted_at: Utc::now(),
    })
}

fn locate_knowledge_file(dir: &Path) -> Option<PathBuf> {
    for name in KNOWLEDGE_FILE_NAMES {
        let found = WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| entry.file_type().is_file() && entry.file_name().to_str() == Some(name));
        if let Some(entry) = found {
            return Some(entry.into_path());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &tempfile::TempDir) -> PipelineConfig {
        PipelineConfig {
            temp_dir: dir.path().join("tmp"),
            output_dir: dir.path().join("out"),
            ..PipelineConfig::default()
        }
    }

    #[tokio::test]
    async fn scans_directory_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();
        std::fs::write(dir.path().join("nested/b.log"), "x").unwrap();
        std::fs::write(dir.path().join("ignore.csv"), "x").unwrap();

        let result = run(&config_for(&dir), dir.path()).await.unwrap();
        assert_eq!(result.source_type, SourceType::Directory);
        assert_eq!(result.files_count, 2);
        assert!(result.kb_file.is_none());
    }

    #[tokio::test]
    async fn empty_directory_yields_zero_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&config_for(&dir), dir.path()).await.unwrap();
        assert_eq!(result.files_count, 0);
        assert!(result.log_files.is_empty());
    }

    #[tokio::test]
    async fn locates_knowledge_file_csv_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();
        std::fs::write(dir.path().join("anomalies_problems.xlsx"), "x").unwrap();
        std::fs::write(dir.path().join("anomalies_problems.csv"), "x").unwrap();

        let result = run(&config_for(&dir), dir.path()).await.unwrap();
        let kb = result.kb_file.unwrap();
        assert_eq!(kb.file_name().unwrap(), "anomalies_problems.csv");
        // The knowledge file is not a log file
        assert_eq!(result.files_count, 1);
    }

    #[tokio::test]
    async fn single_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.txt");
        std::fs::write(&path, "x").unwrap();

        let result = run(&config_for(&dir), &path).await.unwrap();
        assert_eq!(result.source_type, SourceType::File);
        assert_eq!(result.files_count, 1);
        assert_eq!(result.log_files, vec![path]);
    }

    #[tokio::test]
    async fn missing_source_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config_for(&dir), &dir.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedSource(_)));
    }

    #[tokio::test]
    async fn zip_archive_is_extracted_and_scanned() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("logs.zip");
        let file = std::fs::File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer.start_file("inner/a.txt", options).unwrap();
        writer
            .write_all(b"2025-01-01T10:00:05 ERROR Net: down\n")
            .unwrap();
        writer.start_file("readme.md", options).unwrap();
        writer.write_all(b"not a log").unwrap();
        writer.finish().unwrap();

        let result = run(&config_for(&dir), &archive_path).await.unwrap();
        assert_eq!(result.source_type, SourceType::Zip);
        assert_eq!(result.files_count, 1);
        assert!(result.scan_dir.starts_with(dir.path().join("tmp")));
    }
}
