//! The listing markup adapter.
//!
//! Single point of contact with the gazette page structure: row and
//! link selectors, the position of the date in the link text, and the
//! `DD/MM/YYYY` date format. Site changes should require touching only
//! this module.

use chrono::NaiveDate;
use scraper::{Html, Selector};
use url::Url;

use super::ScrapeError;
use crate::domain::{Competence, GazetteEdition};

/// Results table rows.
const ROW_SELECTOR: &str = "tbody tr";
/// The edition link inside a row (first column of the sorted table).
const LINK_SELECTOR: &str = "td.sorting_1 a";
/// Display format of the date trailing the link text.
const DATE_FORMAT: &str = "%d/%m/%Y";

fn selector(source: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(source).map_err(|e| ScrapeError::Selector {
        selector: source,
        message: e.to_string(),
    })
}

/// Extracts the editions on `html` whose displayed date falls inside
/// `target` — month AND year must match.
///
/// Rows with a missing link, an unparseable date, or an unresolvable
/// href are skipped and logged individually; one bad row never aborts
/// the batch. Relative hrefs are resolved against `base_url`.
///
/// # Errors
///
/// Returns [`ScrapeError::Selector`] if a selector fails to compile.
pub fn extract_editions(
    html: &str,
    base_url: &Url,
    target: Competence,
) -> Result<Vec<GazetteEdition>, ScrapeError> {
    let row_selector = selector(ROW_SELECTOR)?;
    let link_selector = selector(LINK_SELECTOR)?;

    let document = Html::parse_document(html);
    let mut editions = Vec::new();

    for (index, row) in document.select(&row_selector).enumerate() {
        let Some(link) = row.select(&link_selector).next() else {
            tracing::warn!(row = index + 1, "no link element in row, skipping");
            continue;
        };

        let text = link.text().collect::<String>();
        let Some(date_token) = text.split_whitespace().next_back() else {
            tracing::warn!(row = index + 1, "empty link text, skipping");
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_token, DATE_FORMAT) else {
            tracing::warn!(row = index + 1, date_token, "unparseable date, skipping");
            continue;
        };

        if !target.contains(date) {
            tracing::debug!(row = index + 1, %date, "outside target competence, ignoring");
            continue;
        }

        let Some(href) = link.value().attr("href") else {
            tracing::warn!(row = index + 1, "link without href, skipping");
            continue;
        };
        let Ok(pdf_url) = base_url.join(href) else {
            tracing::warn!(row = index + 1, href, "unresolvable href, skipping");
            continue;
        };

        editions.push(GazetteEdition { date, pdf_url });
    }

    Ok(editions)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body><table><tbody>
          <tr><td class="sorting_1">
            <a href="/files/dom-100.pdf">Edição nº 100 - 02/06/2025</a>
          </td></tr>
          <tr><td class="sorting_1">
            <a href="https://cdn.gazette.example/dom-101.pdf">Edição nº 101 - 15/06/2025</a>
          </td></tr>
          <tr><td class="sorting_1">
            <a href="/files/dom-090.pdf">Edição nº 90 - 10/05/2025</a>
          </td></tr>
          <tr><td class="sorting_1">
            <a href="/files/dom-050.pdf">Edição nº 50 - 15/06/2024</a>
          </td></tr>
          <tr><td class="sorting_1">
            <a href="/files/dom-999.pdf">Edição especial</a>
          </td></tr>
          <tr><td class="sorting_1">sem link</td></tr>
        </tbody></table></body></html>
    "#;

    fn target() -> Competence {
        let Some(c) = Competence::new(2025, 6) else {
            panic!("valid competence");
        };
        c
    }

    fn base() -> Url {
        let Ok(url) = Url::parse("https://gazette.example/editions?mes=06&ano=2025") else {
            panic!("valid url");
        };
        url
    }

    #[test]
    fn selects_only_target_month_and_year() {
        let Ok(editions) = extract_editions(LISTING, &base(), target()) else {
            panic!("extract failed");
        };

        let urls: Vec<String> = editions.iter().map(|e| e.pdf_url.to_string()).collect();
        assert_eq!(
            urls,
            [
                "https://gazette.example/files/dom-100.pdf",
                "https://cdn.gazette.example/dom-101.pdf",
            ]
        );
    }

    #[test]
    fn bad_rows_do_not_abort_the_batch() {
        // The malformed-date and missing-link rows sit between and after
        // good rows; both good rows must still come through.
        let Ok(editions) = extract_editions(LISTING, &base(), target()) else {
            panic!("extract failed");
        };
        assert_eq!(editions.len(), 2);
    }

    #[test]
    fn same_month_of_other_year_is_excluded() {
        let Ok(editions) = extract_editions(LISTING, &base(), target()) else {
            panic!("extract failed");
        };
        assert!(
            editions
                .iter()
                .all(|e| !e.pdf_url.as_str().contains("dom-050"))
        );
    }

    #[test]
    fn empty_document_yields_no_editions() {
        let Ok(editions) = extract_editions("<html></html>", &base(), target()) else {
            panic!("extract failed");
        };
        assert!(editions.is_empty());
    }
}
