// src/report.rs
// =============================================================================
// Turns the final visit counts into the report the user sees.
//
// Ordering is decided here, not by the crawl: most-linked pages first, ties
// broken alphabetically so two runs over the same site print the same thing.
// =============================================================================

use std::collections::HashMap;

use serde::Serialize;

use crate::normalize::NormalizedKey;

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReportEntry {
    pub url: String,
    pub count: usize,
}

/// The whole report, as written by --json
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub base_url: &'a str,
    pub pages: &'a [PageReportEntry],
}

// Sorts pages by descending count, then ascending address
pub fn sort_pages(pages: HashMap<NormalizedKey, usize>) -> Vec<PageReportEntry> {
    let mut entries: Vec<PageReportEntry> = pages
        .into_iter()
        .map(|(key, count)| PageReportEntry {
            url: key.as_str().to_string(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.url.cmp(&b.url)));
    entries
}

// Renders the human-readable report
pub fn render_text(base_url: &str, entries: &[PageReportEntry]) -> String {
    let rule = "=".repeat(58);
    let mut out = format!("\n{rule}\n  REPORT for {base_url}\n{rule}\n");
    for entry in entries {
        out.push_str(&format!(
            "Found {} internal links to {}\n",
            entry.count, entry.url
        ));
    }
    out
}

pub fn render_json(base_url: &str, entries: &[PageReportEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        base_url,
        pages: entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn counts(pairs: &[(&str, usize)]) -> HashMap<NormalizedKey, usize> {
        pairs
            .iter()
            .map(|(url, count)| (normalize(url).unwrap(), *count))
            .collect()
    }

    #[test]
    fn test_sort_by_count_then_url() {
        let entries = sort_pages(counts(&[
            ("https://example.com/b", 1),
            ("https://example.com", 3),
            ("https://example.com/a", 1),
            ("https://example.com/c", 2),
        ]));

        let order: Vec<(&str, usize)> = entries.iter().map(|e| (e.url.as_str(), e.count)).collect();
        assert_eq!(
            order,
            vec![
                ("example.com", 3),
                ("example.com/c", 2),
                ("example.com/a", 1),
                ("example.com/b", 1),
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        assert!(sort_pages(HashMap::new()).is_empty());
        let text = render_text("https://example.com", &[]);
        assert!(text.contains("REPORT for https://example.com"));
        assert!(!text.contains("Found"));
    }

    #[test]
    fn test_text_lines() {
        let entries = sort_pages(counts(&[("https://example.com/docs", 4)]));
        let text = render_text("https://example.com", &entries);
        assert!(text.ends_with("Found 4 internal links to example.com/docs\n"));
    }

    #[test]
    fn test_json_shape() {
        let entries = sort_pages(counts(&[("https://example.com/docs", 4)]));
        let json = render_json("https://example.com", &entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["base_url"], "https://example.com");
        assert_eq!(value["pages"][0]["url"], "example.com/docs");
        assert_eq!(value["pages"][0]["count"], 4);
    }
}
