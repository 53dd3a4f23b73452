//! The collection pipeline: one strictly linear pass per invocation.
//!
//! Resolve target competence → collect editions from the gazette →
//! fetch PDFs → upload to the anonymous file host → record public URLs
//! through the publications API. Each stage fully completes before the
//! next starts; there are no retries across invocations and no state
//! beyond "one month behind the calendar". Stage short-circuits mirror
//! the pass-through nature of the flow: zero downloads skip the upload,
//! zero uploads skip the recording.

pub mod fetch;
pub mod record;
pub mod upload;

use chrono::Local;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::CollectorConfig;
use crate::domain::Competence;
use crate::scrape::GazetteClient;

/// Counts reported by a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The competence the run collected for.
    pub target: Competence,
    /// Editions matched on the gazette listing.
    pub matched: usize,
    /// PDFs downloaded.
    pub downloaded: usize,
    /// Files uploaded to the file host.
    pub uploaded: usize,
    /// Public URLs recorded through the API.
    pub recorded: usize,
}

/// Runs one collection pass for the month before today.
///
/// # Errors
///
/// Returns an error on setup failures only: HTTP client construction,
/// an invalid listing URL, or an uncreatable downloads directory.
/// Everything per-row, per-file, and per-URL is logged and skipped.
pub async fn run(config: &CollectorConfig) -> anyhow::Result<RunSummary> {
    let target = Competence::previous_month(Local::now().date_naive());
    run_for(config, target).await
}

/// Runs one collection pass for an explicit target competence.
///
/// # Errors
///
/// Same conditions as [`run`].
pub async fn run_for(config: &CollectorConfig, target: Competence) -> anyhow::Result<RunSummary> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("collector_run", %run_id, %target);
    run_stages(config, target, run_id).instrument(span).await
}

async fn run_stages(
    config: &CollectorConfig,
    target: Competence,
    run_id: Uuid,
) -> anyhow::Result<RunSummary> {
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let gazette = GazetteClient::new(http.clone(), config.gazette_url.clone(), config.page_wait)
        .snapshot_dir(config.downloads_dir.clone());
    let editions = gazette.collect(target, run_id).await?;

    let mut summary = RunSummary {
        target,
        matched: editions.len(),
        downloaded: 0,
        uploaded: 0,
        recorded: 0,
    };
    if editions.is_empty() {
        tracing::info!("no editions matched, run finished");
        return Ok(summary);
    }

    summary.downloaded = fetch::download_editions(&http, &editions, &config.downloads_dir).await?;
    if summary.downloaded == 0 {
        return Ok(summary);
    }

    let urls = upload::upload_directory(&http, &config.downloads_dir, &config.upload_url).await;
    summary.uploaded = urls.len();
    if urls.is_empty() {
        return Ok(summary);
    }

    summary.recorded = record::record_publications(&http, &config.api_endpoint, &urls, target).await;

    tracing::info!(?summary, "run finished");
    Ok(summary)
}


#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};

    use super::*;
    use crate::app_state::AppState;
    use crate::persistence::{MemoryStore, PublicationStore};
    use crate::service::PublicationService;

    const LISTING: &str = r#"
        <html><body><table><tbody>
          <tr><td class="sorting_1">
            <a href="/files/dom-100.pdf">Edição nº 100 - 02/06/2025</a>
          </td></tr>
          <tr><td class="sorting_1">
            <a href="/files/dom-101.pdf">Edição nº 101 - 15/06/2025</a>
          </td></tr>
        </tbody></table></body></html>
    "#;

    #[tokio::test]
    async fn end_to_end_records_only_the_successful_file() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            publications: Arc::new(PublicationService::new(
                Arc::clone(&store) as Arc<dyn PublicationStore>
            )),
        };

        // One stub server plays gazette, file host, and API at once.
        let app = Router::new()
            .route("/gazette", get(|| async { axum::response::Html(LISTING) }))
            .route("/files/dom-100.pdf", get(|| async { "PDFBYTES" }))
            .route(
                "/files/dom-101.pdf",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "broken") }),
            )
            .route(
                "/upload",
                post(|| async { "https://files.example/dom-100.pdf\n" }),
            )
            .merge(crate::api::build_router().with_state(state));
        let addr = testutil::serve(app).await;

        let Ok(downloads) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let config = crate::config::CollectorConfig {
            gazette_url: format!("http://{addr}/gazette"),
            upload_url: format!("http://{addr}/upload"),
            api_endpoint: format!("http://{addr}/publications/"),
            downloads_dir: downloads.path().to_path_buf(),
            page_wait: Duration::from_secs(5),
            http_timeout: Duration::from_secs(10),
        };

        let Some(target) = Competence::new(2025, 6) else {
            panic!("valid competence");
        };
        let Ok(summary) = run_for(&config, target).await else {
            panic!("pipeline run failed");
        };

        assert_eq!(summary.matched, 2);
        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.uploaded, 1);
        assert_eq!(summary.recorded, 1);

        let Ok(rows) = store.list(Some("2025-06")).await else {
            panic!("list failed");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows.first().map(|r| r.file_url.as_str()),
            Some("https://files.example/dom-100.pdf")
        );
    }

    #[tokio::test]
    async fn empty_listing_short_circuits_the_run() {
        let app = Router::new().route("/gazette", get(|| async { "<html></html>" }));
        let addr = testutil::serve(app).await;

        let Ok(downloads) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let config = crate::config::CollectorConfig {
            gazette_url: format!("http://{addr}/gazette"),
            upload_url: "http://unused.invalid/upload".to_string(),
            api_endpoint: "http://unused.invalid/publications/".to_string(),
            downloads_dir: downloads.path().join("downloads"),
            page_wait: Duration::from_millis(50),
            http_timeout: Duration::from_secs(5),
        };

        let Some(target) = Competence::new(2025, 6) else {
            panic!("valid competence");
        };
        let Ok(summary) = run_for(&config, target).await else {
            panic!("pipeline run failed");
        };

        assert_eq!(summary.matched, 0);
        assert_eq!(summary.downloaded, 0);
        assert_eq!(summary.uploaded, 0);
        assert_eq!(summary.recorded, 0);
        // Only the diagnostic capture lands in the downloads directory.
        let Ok(entries) = std::fs::read_dir(&config.downloads_dir) else {
            panic!("downloads dir missing");
        };
        let names: Vec<String> = entries
            .filter_map(|e| e.ok().map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names.len(), 1);
        assert!(
            names
                .iter()
                .all(|n| n.starts_with("debug_page_") && n.ends_with(".html"))
        );
    }
}
