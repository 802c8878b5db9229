//! LogForge log anomaly ETL pipeline binary.
//!
//! Ingests unstructured application logs, keeps the anomaly-relevant
//! entries, normalizes their messages, and persists the result set to the
//! configured sinks.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use lf_pipeline::{Pipeline, PipelineConfig, RunStatus, SinkRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lf-pipeline starting");

    let mut args = std::env::args().skip(1);
    let source = PathBuf::from(
        args.next()
            .ok_or_else(|| anyhow::anyhow!("usage: lf-pipeline <source> [config.toml]"))?,
    );
    let config = match args.next() {
        Some(path) => PipelineConfig::from_file(&path)?,
        None => PipelineConfig::from_env(),
    };

    // LF_SINKS selects sinks: relational | csv | spreadsheet | all
    let sinks = match std::env::var("LF_SINKS") {
        Ok(value) => value.parse::<SinkRequest>()?,
        Err(_) => SinkRequest::All,
    };

    let pipeline = Pipeline::new(config);
    let report = pipeline.run(&source, sinks).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.status == RunStatus::Failed {
        anyhow::bail!(
            "pipeline failed: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
