//! Shared fixtures for end-to-end pipeline tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lf_pipeline::PipelineConfig;

/// App log: one INFO line (skipped), one ERROR, one WARNING, one malformed
/// line, and one line whose timestamp digits are not a real date.
pub const APP_LOG: &str = "\
2025-01-01T10:00:00 INFO Boot: system started
2025-01-01T10:00:05 ERROR DiskIO: Failure at 192.168.1.5 code 0x1F after 3 retries
2025-01-01T10:00:07 WARNING Memory: usage at 91%
this line does not parse
2025-13-01T10:00:09 ERROR DiskIO: impossible month
";

/// Net log: timestamps chosen to interleave with APP_LOG in the merge.
pub const NET_LOG: &str = "\
2025-01-01T09:59:59 WARNING Net: link flap on eth0
2025-01-01T10:00:06 ERROR Net: connection refused by 10.0.0.2
";

/// Expected surviving records across APP_LOG + NET_LOG.
pub const EXPECTED_TOTAL: usize = 4;

/// Write the two sample logs into `dir` and return their paths.
pub fn write_sample_logs(dir: &Path) -> Vec<PathBuf> {
    let app = dir.join("app.txt");
    let net = dir.join("net.txt");
    std::fs::write(&app, APP_LOG).unwrap();
    std::fs::write(&net, NET_LOG).unwrap();
    vec![app, net]
}

/// A config whose output and temp directories live under `root`.
pub fn config_under(root: &Path) -> PipelineConfig {
    PipelineConfig {
        output_dir: root.join("out"),
        temp_dir: root.join("tmp"),
        ..PipelineConfig::default()
    }
}

/// File paths in `dir`, sorted by name.
pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map(|iter| iter.filter_map(Result::ok).map(|e| e.path()).collect())
        .unwrap_or_default();
    entries.sort();
    entries
}
