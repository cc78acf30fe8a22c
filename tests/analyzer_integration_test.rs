// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use seo_checker::models::analysis::HttpStatus;
use seo_checker::models::batch::BatchSummary;
use seo_checker::services::analyzer::SeoAnalyzer;
use seo_checker::services::batch::{export_csv, read_batch_input, run_batch, SAMPLE_CSV};
use std::io::Write;
use std::time::Duration;

#[tokio::test]
#[ignore] // Requires internet access
async fn test_analyze_example_com() {
    let analyzer = SeoAnalyzer::new().unwrap();
    let result = analyzer.analyze_url("example.com").await;

    assert_eq!(result.url, "https://example.com");
    assert!(result.error.is_none(), "Unexpected error: {:?}", result.error);
    assert_eq!(result.status_code, HttpStatus::Code(200));
    assert!(result.title_length > 0, "example.com should have a title");

    println!("Analyzed example.com: {:?}", result);
}

#[tokio::test]
#[ignore] // Requires internet access
async fn test_sample_file_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let input = read_batch_input(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(input.urls.len(), 3);

    let analyzer = SeoAnalyzer::new().unwrap();
    let results = run_batch(&analyzer, &input.urls, Duration::from_millis(500), |_| {}).await;
    assert_eq!(results.len(), 3);

    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.total, 3);

    let csv = String::from_utf8(export_csv(&results).unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_batch_input_from_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,URLS").unwrap();
    writeln!(file, "1,example.com").unwrap();
    writeln!(file, "2,").unwrap();
    writeln!(file, "3, https://github.com ").unwrap();

    let input = read_batch_input(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(input.column, "URLS");
    assert_eq!(input.urls, vec!["example.com", "https://github.com"]);
}
