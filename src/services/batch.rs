// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Batch analysis of URLs read from a CSV file.

use crate::models::analysis::AnalysisResult;
use crate::models::batch::{BatchInput, BatchProgress, ExportRecord};
use crate::services::analyzer::PageAnalyzer;
use chrono::{DateTime, TimeZone};
use std::io::Read;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Pause between two consecutive fetches
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Header names (compared case-insensitively) that mark the URL column
pub const URL_COLUMN_NAMES: [&str; 4] = ["url", "urls", "link", "links"];

/// Template offered for download
pub const SAMPLE_CSV: &str = "url\nhttps://example.com\nhttps://google.com\nhttps://github.com";

pub const SAMPLE_FILE_NAME: &str = "sample_urls.csv";

/// Structural problems with an uploaded file; the batch does not start
#[derive(Debug, Error)]
pub enum BatchInputError {
    #[error("No URL column found. Please ensure your CSV has a column named 'url', 'urls', 'link', or 'links'.")]
    NoUrlColumn,
    #[error("Error reading CSV file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Error reading CSV file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write results CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write results CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Index of the first header naming a URL column
pub fn find_url_column(headers: &csv::StringRecord) -> Option<usize> {
    headers.iter().position(|header| {
        URL_COLUMN_NAMES
            .iter()
            .any(|name| header.trim().eq_ignore_ascii_case(name))
    })
}

/// Read URLs from CSV data, skipping rows whose URL cell is empty or missing
pub fn read_batch_input<R: Read>(reader: R) -> Result<BatchInput, BatchInputError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = find_url_column(&headers).ok_or(BatchInputError::NoUrlColumn)?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(column).filter(|url| !url.is_empty()) {
            urls.push(url.to_string());
        }
    }

    Ok(BatchInput {
        column: headers.get(column).unwrap_or_default().to_string(),
        urls,
    })
}

/// Analyze `urls` one at a time, in order, pausing `delay` between fetches.
///
/// `on_progress` is called before each fetch. A failing URL yields a failure
/// record and the run carries on; there is no retry and no cancellation.
pub async fn run_batch<A, F>(
    analyzer: &A,
    urls: &[String],
    delay: Duration,
    mut on_progress: F,
) -> Vec<AnalysisResult>
where
    A: PageAnalyzer,
    F: FnMut(&BatchProgress),
{
    let total = urls.len();
    let mut results = Vec::with_capacity(total);

    tracing::info!(total, "starting batch analysis");

    for (i, url) in urls.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            sleep(delay).await;
        }

        on_progress(&BatchProgress {
            index: i + 1,
            total,
            url: url.clone(),
        });

        let result = analyzer.analyze(url).await;
        tracing::info!(
            index = i + 1,
            total,
            url = %result.url,
            status = %result.status_code,
            "analyzed url"
        );
        results.push(result);
    }

    tracing::info!(total, "batch analysis complete");
    results
}

/// Serialize results as CSV, one row per record, raw fields including `error`
pub fn export_csv(results: &[AnalysisResult]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for result in results {
        writer.serialize(ExportRecord::from(result))?;
    }
    if results.is_empty() {
        writer.write_record(EXPORT_HEADERS)?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Column order of the results CSV, used when there are no rows to derive it from
pub const EXPORT_HEADERS: [&str; 11] = [
    "url",
    "status_code",
    "canonical_url",
    "is_self_referring",
    "noindex_found",
    "nofollow_found",
    "meta_title",
    "title_length",
    "meta_description",
    "desc_length",
    "error",
];

/// `seo_analysis_results_YYYYMMDD_HHMMSS.csv` for a run started at `started_at`
pub fn export_file_name<Tz: TimeZone>(started_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "seo_analysis_results_{}.csv",
        started_at.format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{Canonical, HttpStatus};
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;
    use std::time::Instant;

    /// Records every URL it is asked about; `fail.*` hosts fail
    #[derive(Default)]
    struct StubAnalyzer {
        seen: Mutex<Vec<String>>,
    }

    impl PageAnalyzer for StubAnalyzer {
        async fn analyze(&self, url: &str) -> AnalysisResult {
            self.seen.lock().unwrap().push(url.to_string());
            if url.contains("fail.") {
                return AnalysisResult::failure(url, "connection refused");
            }
            AnalysisResult {
                url: url.to_string(),
                status_code: HttpStatus::Code(200),
                canonical_url: Canonical::NotFound,
                is_self_referring: false,
                noindex_found: false,
                nofollow_found: false,
                meta_title: Some(format!("Title of {}", url)),
                title_length: 0,
                meta_description: None,
                desc_length: 0,
                error: None,
            }
        }
    }

    #[test]
    fn test_reads_url_column() {
        let csv = "name,url\nHome,https://example.com\nBlog,https://example.com/blog\n";
        let input = read_batch_input(csv.as_bytes()).unwrap();

        assert_eq!(input.column, "url");
        assert_eq!(
            input.urls,
            vec!["https://example.com", "https://example.com/blog"]
        );
    }

    #[test]
    fn test_mixed_case_link_column() {
        let csv = "Page,Link\nHome,example.com\nAbout,example.com/about\n";
        let input = read_batch_input(csv.as_bytes()).unwrap();

        assert_eq!(input.column, "Link");
        assert_eq!(input.urls, vec!["example.com", "example.com/about"]);
    }

    #[test]
    fn test_all_column_names_recognized() {
        for header in ["URL", "Urls", "link", "LINKS"] {
            let csv = format!("{}\nexample.com\n", header);
            let input = read_batch_input(csv.as_bytes()).unwrap();
            assert_eq!(input.urls, vec!["example.com"], "header {}", header);
        }
    }

    #[test]
    fn test_first_matching_column_wins() {
        let csv = "links,url\na.com,b.com\n";
        let input = read_batch_input(csv.as_bytes()).unwrap();
        assert_eq!(input.column, "links");
        assert_eq!(input.urls, vec!["a.com"]);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let csv = "url,note\nhttps://a.com,x\n,empty\n   ,spaces\nhttps://b.com,y\nhttps://c.com\n";
        let input = read_batch_input(csv.as_bytes()).unwrap();
        assert_eq!(input.urls, vec!["https://a.com", "https://b.com", "https://c.com"]);
    }

    #[test]
    fn test_missing_url_column() {
        let csv = "name,address\nHome,https://example.com\n";
        let err = read_batch_input(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, BatchInputError::NoUrlColumn));
        assert!(err.to_string().starts_with("No URL column found"));
    }

    #[test]
    fn test_empty_file_has_no_url_column() {
        let err = read_batch_input("".as_bytes()).unwrap_err();
        assert!(matches!(err, BatchInputError::NoUrlColumn));
    }

    #[test]
    fn test_invalid_utf8_is_a_csv_error() {
        let data: &[u8] = b"url\n\xff\xfe\n";
        let err = read_batch_input(data).unwrap_err();
        assert!(matches!(err, BatchInputError::Csv(_)));
    }

    #[test]
    fn test_sample_csv_is_valid_input() {
        let input = read_batch_input(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(input.urls.len(), 3);
        assert_eq!(input.urls[0], "https://example.com");
    }

    #[tokio::test]
    async fn test_run_batch_preserves_order_and_count() {
        let analyzer = StubAnalyzer::default();
        let urls: Vec<String> = ["c.com", "a.com", "fail.example", "b.com"]
            .iter()
            .map(|u| u.to_string())
            .collect();

        let results = run_batch(&analyzer, &urls, Duration::ZERO, |_| {}).await;

        assert_eq!(results.len(), 4);
        let result_urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(result_urls, vec!["c.com", "a.com", "fail.example", "b.com"]);
        assert_eq!(*analyzer.seen.lock().unwrap(), urls);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let analyzer = StubAnalyzer::default();
        let urls = vec!["fail.one".to_string(), "ok.com".to_string()];

        let results = run_batch(&analyzer, &urls, Duration::ZERO, |_| {}).await;

        assert!(results[0].is_failure());
        assert!(!results[1].is_failure());
    }

    #[tokio::test]
    async fn test_progress_reported_for_each_url() {
        let analyzer = StubAnalyzer::default();
        let urls = vec!["a.com".to_string(), "b.com".to_string()];
        let mut progress = Vec::new();

        run_batch(&analyzer, &urls, Duration::ZERO, |p| progress.push(p.clone())).await;

        assert_eq!(
            progress,
            vec![
                BatchProgress {
                    index: 1,
                    total: 2,
                    url: "a.com".to_string()
                },
                BatchProgress {
                    index: 2,
                    total: 2,
                    url: "b.com".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_delay_between_requests() {
        let analyzer = StubAnalyzer::default();
        let urls = vec!["a.com".to_string(), "b.com".to_string(), "c.com".to_string()];

        let started = Instant::now();
        run_batch(&analyzer, &urls, Duration::from_millis(30), |_| {}).await;

        // Two gaps between three requests
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let analyzer = StubAnalyzer::default();
        let results = run_batch(&analyzer, &[], REQUEST_DELAY, |_| {}).await;
        assert!(results.is_empty());
    }

    #[test]
    fn test_export_csv_columns_and_rows() {
        let mut ok = AnalysisResult::failure("https://a.com", "unused");
        ok.error = None;
        ok.status_code = HttpStatus::Code(200);
        ok.canonical_url = Canonical::Found("https://a.com/".to_string());
        ok.is_self_referring = true;
        ok.meta_title = Some("A, with comma".to_string());
        ok.title_length = 13;

        let failed = AnalysisResult::failure("https://b.invalid", "dns error");

        let csv = String::from_utf8(export_csv(&[ok, failed]).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], EXPORT_HEADERS.join(","));
        assert_eq!(
            lines[1],
            "https://a.com,200,https://a.com/,true,false,false,\"A, with comma\",13,,0,"
        );
        assert_eq!(
            lines[2],
            "https://b.invalid,Error,Error,false,false,false,,0,,0,dns error"
        );
    }

    #[test]
    fn test_export_csv_without_rows_has_header() {
        let csv = String::from_utf8(export_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.trim_end(), EXPORT_HEADERS.join(","));
    }

    #[test]
    fn test_export_file_name() {
        let started = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
            .and_utc();
        assert_eq!(
            export_file_name(&started),
            "seo_analysis_results_20260307_090501.csv"
        );
        assert!(export_file_name(&Utc::now()).ends_with(".csv"));
    }
}
