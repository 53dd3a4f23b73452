//! Publication recorder: persists public URLs through the REST API.

use reqwest::StatusCode;
use serde::Serialize;

use crate::domain::Competence;

#[derive(Debug, Serialize)]
struct NewPublication<'a> {
    file_url: &'a str,
    competence: String,
}

/// POSTs each public URL with the run's competence to the publications
/// API. Only a 201 response counts as success; any other status or a
/// connection error is logged for that URL without stopping the loop.
///
/// Returns the number of URLs recorded; the `successes / attempted`
/// tally is logged at the end.
pub async fn record_publications(
    http: &reqwest::Client,
    api_endpoint: &str,
    urls: &[String],
    competence: Competence,
) -> usize {
    tracing::info!(count = urls.len(), %competence, "recording publications");

    let mut successes = 0;
    for file_url in urls {
        let payload = NewPublication {
            file_url,
            competence: competence.to_string(),
        };
        match http.post(api_endpoint).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::CREATED => {
                tracing::info!(%file_url, "publication recorded");
                successes += 1;
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(%file_url, %status, %body, "recording rejected");
            }
            Err(e) => {
                tracing::warn!(%file_url, error = %e, "recording request failed");
            }
        }
    }

    tracing::info!(successes, attempted = urls.len(), "recording pass complete");
    successes
}
