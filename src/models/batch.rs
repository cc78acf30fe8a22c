// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::analysis::AnalysisResult;
use serde::Serialize;

/// URLs pulled from an uploaded CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    /// Header of the column the URLs were read from, as written in the file
    pub column: String,
    /// Non-empty URLs in file order
    pub urls: Vec<String>,
}

/// Progress of a batch run, reported before each URL is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    /// 1-based position of the URL being processed
    pub index: usize,
    pub total: usize,
    pub url: String,
}

/// Counters shown under the results table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Records with status 200
    pub successful: usize,
    /// Canonical other than "Not found" that is not self-referring, failed records included
    pub canonical_issues: usize,
    pub noindex_pages: usize,
    pub missing_titles: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        results.iter().fold(
            BatchSummary {
                total: results.len(),
                ..Default::default()
            },
            |mut summary, result| {
                summary.successful += usize::from(result.status_code.is_ok());
                summary.canonical_issues += usize::from(result.has_canonical_issue());
                summary.noindex_pages += usize::from(result.noindex_found);
                summary.missing_titles += usize::from(result.is_title_missing());
                summary
            },
        )
    }
}

/// One row of the results CSV
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub url: String,
    pub status_code: String,
    pub canonical_url: String,
    pub is_self_referring: bool,
    pub noindex_found: bool,
    pub nofollow_found: bool,
    pub meta_title: Option<String>,
    pub title_length: usize,
    pub meta_description: Option<String>,
    pub desc_length: usize,
    pub error: Option<String>,
}

impl From<&AnalysisResult> for ExportRecord {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            url: result.url.clone(),
            status_code: result.status_code.to_string(),
            canonical_url: result.canonical_url.to_string(),
            is_self_referring: result.is_self_referring,
            noindex_found: result.noindex_found,
            nofollow_found: result.nofollow_found,
            meta_title: result.meta_title.clone(),
            title_length: result.title_length,
            meta_description: result.meta_description.clone(),
            desc_length: result.desc_length,
            error: result.error.clone(),
        }
    }
}
