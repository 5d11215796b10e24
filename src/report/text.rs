//! Human-readable report.

use std::fmt::Write;

use colored::Colorize;

use crate::analysis::{AnalysisResult, DataSource, PerformanceRating, SecurityStatus, Summary};

fn rating_label(rating: PerformanceRating) -> colored::ColoredString {
    let label = rating.to_string();
    match rating {
        PerformanceRating::Excellent => label.green().bold(),
        PerformanceRating::Good => label.green(),
        PerformanceRating::NeedsImprovement => label.yellow(),
        PerformanceRating::Poor => label.red(),
    }
}

fn security_label(status: SecurityStatus) -> colored::ColoredString {
    let label = status.to_string();
    match status {
        SecurityStatus::Secure => label.green(),
        SecurityStatus::Warning => label.yellow(),
        SecurityStatus::Insecure => label.red(),
    }
}

fn source_label(source: DataSource) -> colored::ColoredString {
    match source {
        DataSource::Live => source.to_string().normal(),
        DataSource::Fallback => source.to_string().yellow(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Renders one result as a multi-line text report.
pub fn render_text(result: &AnalysisResult) -> String {
    let summary = Summary::of(result);
    let perf = &result.performance;
    let vitals = &perf.core_web_vitals;
    let seo = &result.seo;
    let technical = &result.technical;

    // Writing to a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.url.bold().underline());
    let _ = writeln!(
        out,
        "  Analyzed at: {}",
        result.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "  Performance: {}/100 ({})   Security: {}   Mobile: {}/100",
        perf.page_speed_score,
        rating_label(summary.performance_rating),
        security_label(summary.security_status),
        summary.mobile_score
    );

    let _ = writeln!(out, "\n{}", "Basic info".bold());
    let _ = writeln!(out, "  Title:         {}", result.basic_info.title);
    let _ = writeln!(out, "  Description:   {}", result.basic_info.description);
    let _ = writeln!(out, "  Status:        {}", result.basic_info.status_code);
    let _ = writeln!(
        out,
        "  Response time: {} ms",
        result.basic_info.response_time_ms
    );
    let _ = writeln!(
        out,
        "  Size:          {} bytes",
        result.basic_info.content_length
    );
    let _ = writeln!(out, "  Last modified: {}", result.basic_info.last_modified);

    let _ = writeln!(out, "\n{}", "Performance".bold());
    let _ = writeln!(
        out,
        "  Lighthouse: performance {:.2}, accessibility {:.2}, best practices {:.2}, seo {:.2}",
        perf.lighthouse.performance,
        perf.lighthouse.accessibility,
        perf.lighthouse.best_practices,
        perf.lighthouse.seo
    );
    let _ = writeln!(
        out,
        "  LCP {:.0} ms, FID {:.0} ms, CLS {:.3}, Speed Index {:.0} ms",
        vitals.lcp_ms, vitals.fid_ms, vitals.cls, vitals.speed_index_ms
    );

    let _ = writeln!(out, "\n{}", "SEO".bold());
    let keywords = if seo.meta_tags.keywords.is_empty() {
        "-".to_string()
    } else {
        seo.meta_tags.keywords.join(", ")
    };
    let _ = writeln!(out, "  Keywords: {keywords}");
    for (key, value) in &seo.meta_tags.og_tags {
        let _ = writeln!(out, "  og:{key}: {value}");
    }
    let _ = writeln!(
        out,
        "  Headings: h1 {}, h2 {}, h3 {}",
        seo.headings.h1, seo.headings.h2, seo.headings.h3
    );
    let _ = writeln!(
        out,
        "  Images:   {} total, {} with alt, {} without alt",
        seo.images.total, seo.images.with_alt, seo.images.without_alt
    );

    let _ = writeln!(out, "\n{}", "Technical".bold());
    let _ = writeln!(out, "  Server:       {}", technical.server_info.server);
    let technologies = if technical.server_info.technologies.is_empty() {
        "-".to_string()
    } else {
        technical.server_info.technologies.join(", ")
    };
    let _ = writeln!(out, "  Technologies: {technologies}");
    let _ = writeln!(out, "  SSL:          {}", yes_no(technical.security.ssl));
    for (name, value) in &technical.security.security_headers {
        let _ = writeln!(out, "  {name}: {value}");
    }
    let _ = writeln!(
        out,
        "  Viewport:     {}",
        yes_no(technical.mobile.viewport)
    );

    let _ = writeln!(out, "\n{}", "Links".bold());
    let _ = writeln!(
        out,
        "  {} total, {} internal, {} external",
        result.links.total, result.links.internal, result.links.external
    );

    let _ = writeln!(
        out,
        "\n  Sources: mobile {}, desktop {}, content {}",
        source_label(result.sources.mobile_score),
        source_label(result.sources.desktop_score),
        source_label(result.sources.content)
    );

    out
}
