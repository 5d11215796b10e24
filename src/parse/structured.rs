//! Open Graph extraction.

use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const OG_PREFIX: &str = "og:";
const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR")
});

/// Extracts Open Graph tags.
///
/// Maps each `<meta property="og:<key>" content="...">` to `key -> content`, with
/// the `og:` prefix removed. Tags with an empty key or empty content are skipped.
/// When a key repeats, the last tag wins.
pub fn extract_og_tags(document: &Html) -> BTreeMap<String, String> {
    let mut og_tags = BTreeMap::new();

    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) else {
            continue;
        };

        let key = property.trim_start_matches(OG_PREFIX).trim();
        let content = content.trim();
        if key.is_empty() || content.is_empty() {
            continue;
        }
        og_tags.insert(key.to_string(), content.to_string());
    }

    og_tags
}
