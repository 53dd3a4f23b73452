//! Uploader: pushes downloaded PDFs to the anonymous file host.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Uploads every `*.pdf` file in `dir` to `upload_url` as multipart
/// form data and returns the public URLs the host handed back (the
/// response body, trimmed of whitespace).
///
/// Per-file failures (read error, network error, HTTP error status)
/// are logged and do not prevent the remaining files from being
/// attempted. The returned list may be empty.
pub async fn upload_directory(
    http: &reqwest::Client,
    dir: &Path,
    upload_url: &str,
) -> Vec<String> {
    let files = match pdf_files(dir).await {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read downloads directory");
            return Vec::new();
        }
    };
    if files.is_empty() {
        tracing::info!("no PDFs to upload");
        return Vec::new();
    }

    let mut uploaded = Vec::new();
    for path in files {
        match upload_one(http, upload_url, &path).await {
            Ok(file_url) => {
                tracing::info!(file = %path.display(), %file_url, "upload succeeded");
                uploaded.push(file_url);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "upload failed, skipping");
            }
        }
    }
    uploaded
}

/// Lists the `*.pdf` files in `dir`, sorted for a stable upload order.
async fn pdf_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

async fn upload_one(
    http: &reqwest::Client,
    upload_url: &str,
    path: &Path,
) -> anyhow::Result<String> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("path has no filename")?;
    let bytes = tokio::fs::read(path).await.context("read failed")?;

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = http
        .post(upload_url)
        .multipart(form)
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("error status")?;

    let body = response.text().await.context("body read failed")?;
    Ok(body.trim().to_string())
}
