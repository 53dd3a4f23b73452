//! Gazette listing client: filtered fetch with a bounded render wait.

use std::path::PathBuf;
use std::time::Duration;

use tokio::time::Instant;
use url::Url;
use uuid::Uuid;

use super::{ScrapeError, markup};
use crate::domain::{Competence, GazetteEdition};

/// Fetches the gazette listing with the month/year filter applied and
/// extracts the PDF links for the target competence.
///
/// The site renders results after the filter is submitted, so the
/// client re-polls the listing under a bounded deadline. When the
/// deadline expires without a matching row the collection step aborts
/// for the run: the last page body is written as a diagnostic capture
/// and zero editions are reported.
#[derive(Debug, Clone)]
pub struct GazetteClient {
    http: reqwest::Client,
    listing_url: String,
    page_wait: Duration,
    poll_interval: Duration,
    snapshot_dir: PathBuf,
}

impl GazetteClient {
    /// Creates a client polling `listing_url` for at most `page_wait`.
    #[must_use]
    pub fn new(http: reqwest::Client, listing_url: String, page_wait: Duration) -> Self {
        Self {
            http,
            listing_url,
            page_wait,
            poll_interval: Duration::from_secs(2),
            snapshot_dir: PathBuf::from("."),
        }
    }

    /// Overrides the delay between listing polls.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Overrides where diagnostic page captures are written.
    #[must_use]
    pub fn snapshot_dir(mut self, dir: PathBuf) -> Self {
        self.snapshot_dir = dir;
        self
    }

    /// Collects the editions published under `target`.
    ///
    /// Fetch failures during the wait are logged and retried; only the
    /// deadline ends the loop. On timeout a `debug_page_<run_id>.html`
    /// capture is written and an empty list is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] only for setup failures: an unparseable
    /// listing URL or selector.
    pub async fn collect(
        &self,
        target: Competence,
        run_id: Uuid,
    ) -> Result<Vec<GazetteEdition>, ScrapeError> {
        let url = self.filtered_url(target)?;
        tracing::info!(%url, %target, "searching gazette listing");

        let deadline = Instant::now() + self.page_wait;
        let mut last_body: Option<String> = None;

        loop {
            match self.fetch_page(&url).await {
                Ok(body) => {
                    let editions = markup::extract_editions(&body, &url, target)?;
                    if !editions.is_empty() {
                        tracing::info!(count = editions.len(), "listing rendered with results");
                        return Ok(editions);
                    }
                    last_body = Some(body);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "listing fetch attempt failed");
                }
            }

            if Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        self.capture_snapshot(run_id, last_body).await;
        tracing::warn!(%target, "no results rendered before deadline, reporting zero");
        Ok(Vec::new())
    }

    /// The listing URL with the `mes`/`ano` filter form values applied
    /// as query parameters.
    fn filtered_url(&self, target: Competence) -> Result<Url, ScrapeError> {
        let mut url =
            Url::parse(&self.listing_url).map_err(|source| ScrapeError::InvalidListingUrl {
                url: self.listing_url.clone(),
                source,
            })?;
        url.query_pairs_mut()
            .append_pair("mes", &target.month_str())
            .append_pair("ano", &target.year_str());
        Ok(url)
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, reqwest::Error> {
        self.http
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// Writes the last fetched page body for post-mortem inspection of
    /// why nothing matched.
    async fn capture_snapshot(&self, run_id: Uuid, body: Option<String>) {
        let Some(body) = body else {
            tracing::warn!("no page body fetched, nothing to capture");
            return;
        };
        if let Err(e) = tokio::fs::create_dir_all(&self.snapshot_dir).await {
            tracing::warn!(error = %e, "failed to create snapshot directory");
            return;
        }
        let path = self.snapshot_dir.join(format!("debug_page_{run_id}.html"));
        match tokio::fs::write(&path, body).await {
            Ok(()) => tracing::warn!(path = %path.display(), "diagnostic page capture written"),
            Err(e) => tracing::warn!(error = %e, "failed to write diagnostic capture"),
        }
    }
}
