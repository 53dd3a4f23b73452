//! Gazette client: listing retrieval and PDF link extraction.
//!
//! The gazette site is a collaborator whose markup may break without
//! notice, so every selector and date-format assumption lives in
//! [`markup`] and nowhere else; [`client::GazetteClient`] only drives
//! the filtered fetch, the bounded render wait, and the diagnostic
//! capture on timeout.

pub mod client;
pub mod markup;

pub use client::GazetteClient;

/// Errors raised while setting up the collection step.
///
/// Per-row and per-request problems are not errors at this level: bad
/// rows are skipped and logged, failed fetch attempts are retried until
/// the render deadline expires and then reported as zero results.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The configured listing URL could not be parsed.
    #[error("invalid listing URL {url}: {source}")]
    InvalidListingUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },

    /// A CSS selector failed to compile.
    #[error("invalid selector {selector}: {message}")]
    Selector {
        /// The selector source text.
        selector: &'static str,
        /// The parser's diagnostic.
        message: String,
    },
}
