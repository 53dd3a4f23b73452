//! A gazette edition matched on the listing page.

use chrono::NaiveDate;
use url::Url;

/// One dated publication row from the gazette listing, normally linking
/// to exactly one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteEdition {
    /// The publication date displayed on the listing row.
    pub date: NaiveDate,
    /// Absolute URL of the edition's PDF.
    pub pdf_url: Url,
}

impl GazetteEdition {
    /// The filename a download of this edition is saved under: the final
    /// path segment of the PDF URL.
    ///
    /// Falls back to the host-relative path when the URL has no segments
    /// (cannot-be-a-base URLs do not occur for http/https links).
    #[must_use]
    pub fn filename(&self) -> String {
        self.pdf_url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|s| !s.is_empty())
            .unwrap_or("download.pdf")
            .to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn edition(url: &str) -> GazetteEdition {
        let Ok(pdf_url) = Url::parse(url) else {
            panic!("valid url");
        };
        let Some(date) = NaiveDate::from_ymd_opt(2025, 6, 2) else {
            panic!("valid date");
        };
        GazetteEdition { date, pdf_url }
    }

    #[test]
    fn filename_is_last_path_segment() {
        let e = edition("https://gazette.example/files/2025/dom-1234.pdf");
        assert_eq!(e.filename(), "dom-1234.pdf");
    }

    #[test]
    fn filename_falls_back_on_bare_host() {
        let e = edition("https://gazette.example/");
        assert_eq!(e.filename(), "download.pdf");
    }
}
