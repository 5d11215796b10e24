//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, FallbackType, ProcessingStats, WarningType};

/// Formats one section: a header with the total, then one line per non-zero count.
fn section<T: Copy>(
    lines: &mut Vec<String>,
    title: &str,
    total: usize,
    types: impl Iterator<Item = T>,
    count: impl Fn(T) -> usize,
    label: impl Fn(T) -> &'static str,
) {
    if total == 0 {
        return;
    }
    lines.push(format!("{title} ({total} total):"));
    for item in types {
        let n = count(item);
        if n > 0 {
            lines.push(format!("   {}: {}", label(item), n));
        }
    }
}

/// Builds the summary lines for error, warning, and fallback counts.
///
/// Sections with no counts are omitted.
pub fn processing_statistics_lines(stats: &ProcessingStats) -> Vec<String> {
    let mut lines = Vec::new();
    section(
        &mut lines,
        "Error Counts",
        stats.total_errors(),
        ErrorType::iter(),
        |t: ErrorType| stats.get_error_count(t),
        |t: ErrorType| t.as_str(),
    );
    section(
        &mut lines,
        "Warning Counts",
        stats.total_warnings(),
        WarningType::iter(),
        |t: WarningType| stats.get_warning_count(t),
        |t: WarningType| t.as_str(),
    );
    section(
        &mut lines,
        "Fallback Counts",
        stats.total_fallbacks(),
        FallbackType::iter(),
        |t: FallbackType| stats.get_fallback_count(t),
        |t: FallbackType| t.as_str(),
    );
    lines
}

/// Prints error, warning, and fallback statistics to the log.
pub fn print_processing_statistics(stats: &ProcessingStats) {
    for line in processing_statistics_lines(stats) {
        info!("{line}");
    }
}
