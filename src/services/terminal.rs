// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Plain-text rendering for the command line.

use crate::models::analysis::AnalysisResult;
use crate::models::batch::{BatchProgress, BatchSummary};
use crate::services::format::{
    canonical_badge, meta_display, nofollow_badge, noindex_badge, status_badge, Badge,
    BadgeClass, CanonicalStatus, MetaDisplay, MetaField,
};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Badge label colored by class; plain brackets when `color` is off
pub fn badge_text(badge: &Badge, color: bool) -> String {
    let label = format!("[{}]", badge.label);
    if !color {
        return label;
    }
    match badge.class {
        BadgeClass::Good => label.green().bold().to_string(),
        BadgeClass::Bad => label.red().bold().to_string(),
        BadgeClass::Warning => label.yellow().bold().to_string(),
    }
}

pub fn meta_text(display: &MetaDisplay, color: bool) -> String {
    match display {
        MetaDisplay::Present {
            text,
            length,
            class,
        } => format!(
            "{} {}",
            text,
            badge_text(
                &Badge {
                    class: *class,
                    label: format!("{} chars", length),
                },
                color
            )
        ),
        MetaDisplay::Missing { field } => {
            let marker = format!("Missing {}", field);
            if color {
                marker.red().italic().to_string()
            } else {
                marker
            }
        }
    }
}

/// Multi-line report for the single-URL flow
pub fn single_report(result: &AnalysisResult, color: bool) -> String {
    if let Some(error) = &result.error {
        return format!("Error analyzing URL: {}", error);
    }

    let mut out = String::new();
    let _ = writeln!(out, "URL:          {}", result.url);
    let _ = writeln!(
        out,
        "Status Code:  {}",
        badge_text(&status_badge(&result.status_code), color)
    );
    let _ = writeln!(
        out,
        "Canonical:    {}",
        badge_text(
            &canonical_badge(&result.canonical_url, result.is_self_referring),
            color
        )
    );
    if CanonicalStatus::classify(&result.canonical_url, result.is_self_referring)
        == CanonicalStatus::NonSelfReferring
    {
        let _ = writeln!(out, "              Canonical URL: {}", result.canonical_url);
    }
    let _ = writeln!(
        out,
        "Noindex:      {}",
        badge_text(&noindex_badge(result.noindex_found), color)
    );
    let _ = writeln!(
        out,
        "Nofollow:     {}",
        badge_text(&nofollow_badge(result.nofollow_found), color)
    );
    let _ = writeln!(
        out,
        "Title:        {}",
        meta_text(
            &meta_display(
                result.meta_title.as_deref(),
                result.title_length,
                MetaField::Title
            ),
            color
        )
    );
    let _ = write!(
        out,
        "Description:  {}",
        meta_text(
            &meta_display(
                result.meta_description.as_deref(),
                result.desc_length,
                MetaField::Description
            ),
            color
        )
    );
    out
}

/// One line per result: status, canonical, robots, then the URL
pub fn batch_table(results: &[AnalysisResult], color: bool) -> String {
    let mut out = String::from("STATUS   CANONICAL             NOINDEX        NOFOLLOW       URL\n");
    for result in results {
        let _ = writeln!(
            out,
            "{}  {}  {}  {}  {}",
            pad(
                badge_text(&status_badge(&result.status_code), color),
                &status_badge(&result.status_code),
                7
            ),
            pad(
                badge_text(
                    &canonical_badge(&result.canonical_url, result.is_self_referring),
                    color
                ),
                &canonical_badge(&result.canonical_url, result.is_self_referring),
                20
            ),
            pad(
                badge_text(&noindex_badge(result.noindex_found), color),
                &noindex_badge(result.noindex_found),
                13
            ),
            pad(
                badge_text(&nofollow_badge(result.nofollow_found), color),
                &nofollow_badge(result.nofollow_found),
                13
            ),
            result.url
        );
        let _ = writeln!(
            out,
            "    title: {}",
            meta_text(
                &meta_display(
                    result.meta_title.as_deref(),
                    result.title_length,
                    MetaField::Title
                ),
                color
            )
        );
        let _ = writeln!(
            out,
            "    description: {}",
            meta_text(
                &meta_display(
                    result.meta_description.as_deref(),
                    result.desc_length,
                    MetaField::Description
                ),
                color
            )
        );
        if let Some(error) = &result.error {
            let _ = writeln!(out, "    error: {}", error);
        }
    }
    out
}

/// Pad a possibly colored cell based on its visible width
fn pad(cell: String, badge: &Badge, width: usize) -> String {
    let visible = badge.label.chars().count() + 2;
    format!("{}{}", cell, " ".repeat(width.saturating_sub(visible)))
}

pub fn progress_line(progress: &BatchProgress) -> String {
    format!(
        "Analyzing {}/{}: {}",
        progress.index, progress.total, progress.url
    )
}

pub fn summary_text(summary: &BatchSummary) -> String {
    format!(
        "Summary Statistics\n  Successful Requests: {}/{}\n  Canonical Issues:    {}\n  Noindex Pages:       {}\n  Missing Titles:      {}",
        summary.successful,
        summary.total,
        summary.canonical_issues,
        summary.noindex_pages,
        summary.missing_titles
    )
}
