//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title
//! - Meta description and keywords
//! - Viewport presence

use scraper::{Html, Selector};
use std::sync::LazyLock;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const NAMED_META_SELECTOR_STR: &str = "meta[name]";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static NAMED_META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(NAMED_META_SELECTOR_STR, "NAMED_META_SELECTOR")
});

/// Finds the first `<meta name="...">` whose name matches case-insensitively.
fn find_named_meta<'a>(document: &'a Html, name: &str) -> Option<scraper::ElementRef<'a>> {
    document.select(&NAMED_META_SELECTOR).find(|element| {
        element
            .value()
            .attr("name")
            .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
    })
}

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed of whitespace, or an
/// empty string if there is none.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            // text() decodes entities and skips nested markup
            let title = element.text().collect::<String>().trim().to_string();
            log::debug!("Extracted title text: '{}' (length: {})", title, title.len());
            title
        }
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description from an HTML document.
///
/// Returns the trimmed `content` of `<meta name="description">`, or an empty
/// string if the tag or its `content` attribute is missing.
pub fn extract_meta_description(document: &Html) -> String {
    find_named_meta(document, "description")
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts meta keywords from an HTML document.
///
/// Splits the `content` of `<meta name="keywords">` on commas, trimming each
/// keyword and dropping empty ones. Case is preserved.
pub fn extract_meta_keywords(document: &Html) -> Vec<String> {
    find_named_meta(document, "keywords")
        .and_then(|element| element.value().attr("content"))
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Checks for a `<meta name="viewport">` tag.
pub fn has_viewport(document: &Html) -> bool {
    find_named_meta(document, "viewport").is_some()
}
