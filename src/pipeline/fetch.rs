//! File fetcher: streaming PDF downloads into the downloads directory.

use std::path::Path;

use anyhow::Context;
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::domain::GazetteEdition;

/// Downloads every edition's PDF into `dir`, one streaming GET per
/// file, named after the URL's final path segment.
///
/// The directory is created if absent. Per-file failures (network
/// error, non-success status, write error) are logged and skipped;
/// partially written files are removed. Returns the number of files
/// downloaded.
///
/// # Errors
///
/// Returns an error only when the downloads directory cannot be
/// created.
pub async fn download_editions(
    http: &reqwest::Client,
    editions: &[GazetteEdition],
    dir: &Path,
) -> std::io::Result<usize> {
    tokio::fs::create_dir_all(dir).await?;

    let mut downloaded = 0;
    for edition in editions {
        match download_one(http, edition, dir).await {
            Ok(filename) => {
                tracing::info!(%filename, date = %edition.date, "edition downloaded");
                downloaded += 1;
            }
            Err(e) => {
                tracing::warn!(url = %edition.pdf_url, error = %e, "download failed, skipping");
            }
        }
    }

    if downloaded == 0 {
        tracing::info!("no files downloaded for the target competence");
    } else {
        tracing::info!(downloaded, "download pass complete");
    }
    Ok(downloaded)
}

async fn download_one(
    http: &reqwest::Client,
    edition: &GazetteEdition,
    dir: &Path,
) -> anyhow::Result<String> {
    let filename = edition.filename();
    let path = dir.join(&filename);

    let response = http
        .get(edition.pdf_url.clone())
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("error status")?;

    let result = write_body(response, &path).await;
    if result.is_err() {
        // Leave no partial file behind for the uploader to pick up.
        let _ = tokio::fs::remove_file(&path).await;
    }
    result?;
    Ok(filename)
}

async fn write_body(response: reqwest::Response, path: &Path) -> anyhow::Result<()> {
    let mut file = tokio::fs::File::create(path).await.context("create failed")?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("body read failed")?;
        file.write_all(&chunk).await.context("write failed")?;
    }
    file.flush().await.context("flush failed")?;
    Ok(())
}
