//! Heading, image and link extraction.

use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

const H1_SELECTOR_STR: &str = "h1";
const H2_SELECTOR_STR: &str = "h2";
const H3_SELECTOR_STR: &str = "h3";
const IMG_SELECTOR_STR: &str = "img";
const ANCHOR_SELECTOR_STR: &str = "a[href]";

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(H2_SELECTOR_STR, "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(H3_SELECTOR_STR, "H3_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Number of `<h1>`, `<h2>` and `<h3>` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// Image alt-text coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

/// Link counts. `internal + external <= total`; hrefs with other schemes
/// (`mailto:`, `tel:`, `javascript:`) and bare fragments count only in `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
}

/// Counts `<h1>`, `<h2>` and `<h3>` elements.
pub fn count_headings(document: &Html) -> HeadingCounts {
    HeadingCounts {
        h1: document.select(&H1_SELECTOR).count(),
        h2: document.select(&H2_SELECTOR).count(),
        h3: document.select(&H3_SELECTOR).count(),
    }
}

/// Counts `<img>` elements and those carrying a non-empty `alt` attribute.
///
/// An `alt` consisting only of whitespace counts as missing.
pub fn extract_images(document: &Html) -> ImageStats {
    let mut total = 0;
    let mut with_alt = 0;

    for element in document.select(&IMG_SELECTOR) {
        total += 1;
        if element
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty())
        {
            with_alt += 1;
        }
    }

    ImageStats {
        total,
        with_alt,
        without_alt: total - with_alt,
    }
}

/// Extracts `href` values from `<a>` elements, in document order.
///
/// Empty and whitespace-only hrefs are dropped; the rest are trimmed.
pub fn extract_links(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(String::from)
        .collect()
}

/// Classifies hrefs as internal or external relative to `page`.
///
/// Relative hrefs and absolute http(s) hrefs to the page's host are internal;
/// absolute http(s) hrefs to any other host are external.
pub fn classify_links(hrefs: &[String], page: &Url) -> LinkStats {
    let page_host = page.host_str();
    let mut stats = LinkStats {
        total: hrefs.len(),
        ..Default::default()
    };

    for href in hrefs {
        if href.starts_with('#') {
            continue;
        }
        let Ok(resolved) = page.join(href) else {
            continue;
        };
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }
        if resolved.host_str() == page_host {
            stats.internal += 1;
        } else {
            stats.external += 1;
        }
    }

    stats
}
