//! collector entry point.
//!
//! Runs one collection pass: scrape the gazette for last month's
//! editions, fetch the PDFs, upload them to the file host, and record
//! the public URLs through the publications API.

use tracing_subscriber::EnvFilter;

use gazette_collector::config::CollectorConfig;
use gazette_collector::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = CollectorConfig::from_env()?;
    tracing::info!(gazette_url = %config.gazette_url, "starting collector");

    let summary = pipeline::run(&config).await?;
    tracing::info!(
        matched = summary.matched,
        downloaded = summary.downloaded,
        uploaded = summary.uploaded,
        recorded = summary.recorded,
        "collector finished"
    );

    Ok(())
}
