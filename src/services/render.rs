// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! HTML rendering for the web UI.
//!
//! Every string that comes from a fetched page or an uploaded file goes
//! through `html_escape` before it is written into markup.

use crate::models::analysis::AnalysisResult;
use crate::models::batch::{BatchProgress, BatchSummary};
use crate::services::format::{
    canonical_badge, meta_display, nofollow_badge, noindex_badge, status_badge, Badge,
    BadgeClass, CanonicalStatus, MetaDisplay, MetaField,
};
use crate::services::terminal::progress_line;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const PAGE_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #212529; }
nav { background: #f8f9fa; padding: 12px 24px; border-bottom: 1px solid #ddd; }
nav a { margin-right: 16px; }
main { padding: 24px; max-width: 1200px; }
.status-200 { color: white; background-color: #28a745; padding: 5px 10px; border-radius: 5px; font-weight: bold; }
.status-error { color: white; background-color: #dc3545; padding: 5px 10px; border-radius: 5px; font-weight: bold; }
.tag-good { color: white; background-color: #28a745; padding: 3px 8px; border-radius: 3px; font-size: 12px; }
.tag-bad { color: white; background-color: #dc3545; padding: 3px 8px; border-radius: 3px; font-size: 12px; }
.tag-warning { background-color: #ffc107; padding: 3px 8px; border-radius: 3px; font-size: 12px; color: black; }
.error-message { color: #dc3545; font-style: italic; }
.warning { background: #fff3cd; padding: 12px; border-radius: 5px; }
.columns { display: flex; gap: 48px; }
.metrics { display: flex; gap: 32px; }
.metric strong { display: block; font-size: 28px; }
table { width: 100%; border-collapse: collapse; }
th { background-color: #f8f9fa; padding: 12px; border: 1px solid #ddd; }
td { padding: 8px; border: 1px solid #ddd; }
td.url { max-width: 200px; word-break: break-all; }
td.center { text-align: center; }
td.meta { max-width: 300px; }
footer { text-align: center; color: #666; font-size: 14px; padding: 24px; }
"#;

/// Wrap `body` in the page chrome (navigation between the two modes, styles, footer)
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - SEO URL Checker</title>
    <style>{PAGE_STYLES}</style>
</head>
<body>
    <nav><strong>SEO URL Checker</strong> <a href="/">Single URL</a><a href="/batch">CSV Upload</a></nav>
    <main>
        <h1>{title}</h1>
        {body}
    </main>
    <footer>SEO URL Checker v{version}</footer>
</body>
</html>"#,
        title = encode_text(title),
        version = crate::app::VERSION,
    )
}

/// Status code span (`status-200` or `status-error`)
pub fn status_html(badge: &Badge) -> String {
    let class = match badge.class {
        BadgeClass::Good => "status-200",
        _ => "status-error",
    };
    span(class, &badge.label)
}

/// Colored tag span
pub fn badge_html(badge: &Badge) -> String {
    let class = match badge.class {
        BadgeClass::Good => "tag-good",
        BadgeClass::Bad => "tag-bad",
        BadgeClass::Warning => "tag-warning",
    };
    span(class, &badge.label)
}

/// Truncated text plus length tag, or the "missing" marker
pub fn meta_html(display: &MetaDisplay) -> String {
    match display {
        MetaDisplay::Present {
            text,
            length,
            class,
        } => format!(
            "{} {}",
            encode_text(text),
            badge_html(&Badge {
                class: *class,
                label: format!("({} chars)", length),
            })
        ),
        MetaDisplay::Missing { field } => span("error-message", &format!("Missing {}", field)),
    }
}

fn span(class: &str, text: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, encode_text(text))
}

fn title_html(result: &AnalysisResult) -> String {
    meta_html(&meta_display(
        result.meta_title.as_deref(),
        result.title_length,
        MetaField::Title,
    ))
}

fn description_html(result: &AnalysisResult) -> String {
    meta_html(&meta_display(
        result.meta_description.as_deref(),
        result.desc_length,
        MetaField::Description,
    ))
}

/// Single-URL form, optionally prefilled
pub fn single_form(value: &str) -> String {
    format!(
        r#"<form method="post" action="/check">
    <label for="url">Enter URL to analyze:</label>
    <input id="url" name="url" type="text" size="60" placeholder="https://example.com or example.com" value="{}">
    <button type="submit">Analyze URL</button>
</form>"#,
        encode_double_quoted_attribute(value)
    )
}

/// Upload form with the sample template link
pub fn batch_form() -> String {
    r#"<form method="post" action="/batch" enctype="multipart/form-data">
    <label for="file">Upload CSV file with URLs:</label>
    <input id="file" name="file" type="file" accept=".csv,text/csv">
    <button type="submit">Analyze All URLs</button>
</form>
<p>The CSV needs a column named <code>url</code>, <code>urls</code>, <code>link</code> or <code>links</code>.
<a href="/sample.csv">Download Sample CSV</a></p>"#
        .to_string()
}

pub fn warning_html(message: &str) -> String {
    format!(r#"<p class="warning">{}</p>"#, encode_text(message))
}

pub fn error_html(message: &str) -> String {
    format!(r#"<p class="error-message">{}</p>"#, encode_text(message))
}

/// Detail view for one result; failed records show only the error
pub fn single_result_html(result: &AnalysisResult) -> String {
    if let Some(error) = &result.error {
        return error_html(&format!("Error analyzing URL: {}", error));
    }

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="columns">
<section>
    <h2>Technical Status</h2>
    <p><strong>URL:</strong> {url}</p>
    <p><strong>Status Code:</strong> {status}</p>
    <p><strong>Canonical:</strong> {canonical}</p>"#,
        url = encode_text(&result.url),
        status = status_html(&status_badge(&result.status_code)),
        canonical = badge_html(&canonical_badge(
            &result.canonical_url,
            result.is_self_referring
        )),
    );

    if CanonicalStatus::classify(&result.canonical_url, result.is_self_referring)
        == CanonicalStatus::NonSelfReferring
    {
        let _ = write!(
            html,
            "\n    <p><em>Canonical URL: {}</em></p>",
            encode_text(result.canonical_url.as_str())
        );
    }

    let _ = write!(
        html,
        r#"
</section>
<section>
    <h2>Robot Directives</h2>
    <p><strong>Noindex:</strong> {noindex}</p>
    <p><strong>Nofollow:</strong> {nofollow}</p>
</section>
</div>
<h2>Meta Information</h2>
<p><strong>Title:</strong> {title}</p>
<p><strong>Description:</strong> {description}</p>"#,
        noindex = badge_html(&noindex_badge(result.noindex_found)),
        nofollow = badge_html(&nofollow_badge(result.nofollow_found)),
        title = title_html(result),
        description = description_html(result),
    );

    html
}

/// Results table, one row per record in input order
pub fn results_table(results: &[AnalysisResult]) -> String {
    let mut html = String::from(
        "<table>\n<tr><th>URL</th><th>Status</th><th>Canonical</th><th>Noindex</th>\
         <th>Nofollow</th><th>Title</th><th>Description</th></tr>\n",
    );

    for result in results {
        let _ = writeln!(
            html,
            r#"<tr><td class="url">{}</td><td class="center">{}</td><td class="center">{}</td><td class="center">{}</td><td class="center">{}</td><td class="meta">{}</td><td class="meta">{}</td></tr>"#,
            encode_text(&result.url),
            status_html(&status_badge(&result.status_code)),
            badge_html(&canonical_badge(
                &result.canonical_url,
                result.is_self_referring
            )),
            badge_html(&noindex_badge(result.noindex_found)),
            badge_html(&nofollow_badge(result.nofollow_found)),
            title_html(result),
            description_html(result),
        );
    }

    html.push_str("</table>");
    html
}

pub fn summary_html(summary: &BatchSummary) -> String {
    format!(
        r#"<h2>Summary Statistics</h2>
<div class="metrics">
    <div class="metric">Successful Requests<strong>{}/{}</strong></div>
    <div class="metric">Canonical Issues<strong>{}</strong></div>
    <div class="metric">Noindex Pages<strong>{}</strong></div>
    <div class="metric">Missing Titles<strong>{}</strong></div>
</div>"#,
        summary.successful,
        summary.total,
        summary.canonical_issues,
        summary.noindex_pages,
        summary.missing_titles
    )
}

/// Collapsible log of the `Analyzing i/N: url` lines of a finished run
pub fn progress_log_html(progress: &[BatchProgress]) -> String {
    let mut html = format!(
        "<details class=\"progress\">\n<summary>Found {} URLs to analyze</summary>\n<ol>\n",
        progress.len()
    );
    for step in progress {
        let _ = writeln!(html, "<li>{}</li>", encode_text(&progress_line(step)));
    }
    html.push_str("</ol>\n</details>");
    html
}

/// Full batch report: count line, table, download link and counters
pub fn batch_report_html(
    results: &[AnalysisResult],
    summary: &BatchSummary,
    download_href: &str,
    file_name: &str,
) -> String {
    format!(
        r#"<p>Analysis complete! {count} URLs analyzed.</p>
<h2>Analysis Results</h2>
{table}
<p><a href="{href}" download="{file}">Download Results as CSV</a></p>
{summary}"#,
        count = results.len(),
        table = results_table(results),
        href = encode_double_quoted_attribute(download_href),
        file = encode_double_quoted_attribute(file_name),
        summary = summary_html(summary),
    )
}
