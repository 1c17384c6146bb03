//! Entry extraction from listing pages
//!
//! Each listing page carries its results as clickable `div.row` elements
//! whose `onclick` attribute navigates to the entry's detail page, with the
//! display title inside a `<b>` element. Extraction is best-effort: a page
//! that yields no valid rows extracts to an empty list, never an error.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use url::Url;

use crate::ScrapeError;

/// One extracted listing record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Entry {
    /// Display text of the row's title element
    pub title: String,
    /// Absolute URL of the entry's detail page
    pub link: String,
}

/// Extracts [`Entry`] records from raw listing markup
///
/// Holds the compiled row/title selectors and the link pattern, so the
/// concrete markup machinery stays behind this one surface.
#[derive(Debug, Clone)]
pub struct EntryExtractor {
    base_url: String,
    row_selector: Selector,
    title_selector: Selector,
    link_pattern: Regex,
}

impl EntryExtractor {
    /// Compiles the selectors and link pattern for the given base URL
    ///
    /// The link pattern captures the path segment between the base URL's own
    /// path (e.g. `/encyclopedia/`) and the closing quote of the `onclick`
    /// navigation string.
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let row_selector = Selector::parse(r#"div.row[onclick*="location.href"]"#)
            .map_err(|e| ScrapeError::Selector(e.to_string()))?;
        let title_selector =
            Selector::parse("b").map_err(|e| ScrapeError::Selector(e.to_string()))?;

        let base_path = Url::parse(base_url)?.path().to_string();
        let link_pattern = Regex::new(&format!("{}/([^']+)'", regex::escape(&base_path)))?;

        Ok(Self {
            base_url: base_url.to_string(),
            row_selector,
            title_selector,
            link_pattern,
        })
    }

    /// Extracts all entries from one page of raw markup, in document order
    ///
    /// Never fails: empty input yields an empty vec, and rows missing either
    /// the navigation attribute or a `<b>` title holder are skipped.
    pub fn extract(&self, html: &str) -> Vec<Entry> {
        if html.is_empty() {
            return Vec::new();
        }

        let document = Html::parse_document(html);

        document
            .select(&self.row_selector)
            .filter(|row| self.is_valid_row(row))
            .map(|row| self.extract_entry(&row))
            .collect()
    }

    /// A candidate row is valid iff its navigation attribute is non-empty
    /// and it contains a title holder
    fn is_valid_row(&self, row: &ElementRef) -> bool {
        let has_onclick = row
            .value()
            .attr("onclick")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        has_onclick && row.select(&self.title_selector).next().is_some()
    }

    /// Builds the entry for a valid row
    ///
    /// An `onclick` value the link pattern does not match degrades to an
    /// empty path segment, producing `{base_url}/` rather than dropping the
    /// row.
    fn extract_entry(&self, row: &ElementRef) -> Entry {
        let onclick = row.value().attr("onclick").unwrap_or("");

        let link_path = self
            .link_pattern
            .captures(onclick)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");

        let title = row
            .select(&self.title_selector)
            .next()
            .map(|b| b.text().collect::<String>())
            .unwrap_or_default();

        Entry {
            title,
            link: format!("{}/{}", self.base_url, link_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.fortiguard.com/encyclopedia";

    fn extractor() -> EntryExtractor {
        EntryExtractor::new(BASE).unwrap()
    }

    fn row(onclick: &str, inner: &str) -> String {
        format!(r#"<div class="row" onclick="{}">{}</div>"#, onclick, inner)
    }

    #[test]
    fn test_extract_valid_row() {
        let html = row(
            "location.href='/encyclopedia/ips/12345'",
            "<b>Example</b>",
        );
        let entries = extractor().extract(&html);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Example");
        assert_eq!(
            entries[0].link,
            "https://www.fortiguard.com/encyclopedia/ips/12345"
        );
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_row_without_onclick_rejected() {
        let html = r#"<div class="row"><b>Example</b></div>"#;
        assert!(extractor().extract(html).is_empty());
    }

    #[test]
    fn test_row_without_title_holder_rejected() {
        let html = row("location.href='/encyclopedia/ips/1'", "<span>Example</span>");
        assert!(extractor().extract(&html).is_empty());
    }

    #[test]
    fn test_row_with_unrelated_onclick_rejected() {
        let html = row("doSomethingElse()", "<b>Example</b>");
        assert!(extractor().extract(&html).is_empty());
    }

    #[test]
    fn test_unmatched_pattern_degrades_to_base_link() {
        let html = row("location.href='/elsewhere/ips/1'", "<b>Example</b>");
        let entries = extractor().extract(&html);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, format!("{}/", BASE));
    }

    #[test]
    fn test_every_link_starts_with_base_url() {
        let html = [
            row("location.href='/encyclopedia/ips/1'", "<b>A</b>"),
            row("location.href='/broken", "<b>B</b>"),
            row("location.href='/encyclopedia/ips/2'", "<b>C</b>"),
        ]
        .join("\n");

        let entries = extractor().extract(&html);
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert!(entry.link.starts_with(&format!("{}/", BASE)));
        }
    }

    #[test]
    fn test_entries_in_document_order() {
        let html = [
            row("location.href='/encyclopedia/ips/1'", "<b>First</b>"),
            row("location.href='/encyclopedia/ips/2'", "<b>Second</b>"),
            row("location.href='/encyclopedia/ips/3'", "<b>Third</b>"),
        ]
        .join("\n");

        let titles: Vec<String> = extractor()
            .extract(&html)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_title_from_first_bold_element() {
        let html = row(
            "location.href='/encyclopedia/ips/1'",
            "<b>Primary</b><b>Secondary</b>",
        );
        let entries = extractor().extract(&html);
        assert_eq!(entries[0].title, "Primary");
    }

    #[test]
    fn test_nested_title_text_collected() {
        let html = row(
            "location.href='/encyclopedia/ips/1'",
            "<b>Mal<i>ware</i> A</b>",
        );
        let entries = extractor().extract(&html);
        assert_eq!(entries[0].title, "Malware A");
    }

    #[test]
    fn test_surrounding_markup_ignored() {
        let html = format!(
            "<html><body><table><tr><td>noise</td></tr></table>{}<footer>f</footer></body></html>",
            row("location.href='/encyclopedia/ips/9'", "<b>Example</b>")
        );
        let entries = extractor().extract(&html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Example");
    }
}
