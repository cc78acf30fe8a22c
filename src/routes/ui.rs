// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! HTML pages for the single-URL and batch modes, plus the CSV downloads.

use crate::app::AppState;
use crate::models::api::CheckForm;
use crate::models::batch::BatchSummary;
use crate::services::batch::{
    export_csv, export_file_name, read_batch_input, run_batch, REQUEST_DELAY, SAMPLE_CSV,
    SAMPLE_FILE_NAME,
};
use crate::services::exports::StoredExport;
use crate::services::render::{
    batch_form, batch_report_html, error_html, page, progress_log_html, single_form,
    single_result_html, warning_html,
};
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form,
};
use uuid::Uuid;

const SINGLE_TITLE: &str = "Single URL Analysis";
const BATCH_TITLE: &str = "Batch URL Analysis";

type PageError = (StatusCode, Html<String>);

fn batch_error(status: StatusCode, message: &str) -> PageError {
    let body = format!("{}\n{}", error_html(message), batch_form());
    (status, Html(page(BATCH_TITLE, &body)))
}

/// GET / - Empty single-URL form
pub async fn single_page_handler() -> Html<String> {
    Html(page(SINGLE_TITLE, &single_form("")))
}

/// POST /check - Analyze the submitted URL and render its report
pub async fn check_handler(
    State(state): State<AppState>,
    Form(form): Form<CheckForm>,
) -> (StatusCode, Html<String>) {
    let url = form.url.trim();
    if url.is_empty() {
        let body = format!(
            "{}\n{}",
            single_form(""),
            warning_html("Please enter a URL to analyze!")
        );
        return (StatusCode::BAD_REQUEST, Html(page(SINGLE_TITLE, &body)));
    }

    let result = state.analyzer.analyze_url(url).await;
    let body = format!("{}\n{}", single_form(url), single_result_html(&result));
    (StatusCode::OK, Html(page(SINGLE_TITLE, &body)))
}

/// GET /batch - Upload form
pub async fn batch_page_handler() -> Html<String> {
    Html(page(BATCH_TITLE, &batch_form()))
}

/// POST /batch - Analyze every URL of the uploaded CSV and render the report
pub async fn batch_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read upload: {}", e);
        batch_error(StatusCode::BAD_REQUEST, &format!("Error reading CSV file: {}", e))
    })? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                batch_error(StatusCode::BAD_REQUEST, &format!("Error reading CSV file: {}", e))
            })?;
            upload = Some(bytes);
        }
    }

    let Some(upload) = upload else {
        return Err(batch_error(
            StatusCode::BAD_REQUEST,
            "Please upload a CSV file.",
        ));
    };

    let input = read_batch_input(upload.as_ref()).map_err(|e| {
        tracing::warn!("Rejected batch upload: {}", e);
        batch_error(StatusCode::BAD_REQUEST, &e.to_string())
    })?;

    tracing::info!(column = %input.column, "Found {} URLs to analyze", input.urls.len());

    let mut progress_log = Vec::with_capacity(input.urls.len());
    let results = run_batch(state.analyzer.as_ref(), &input.urls, REQUEST_DELAY, |progress| {
        tracing::info!("Analyzing {}/{}: {}", progress.index, progress.total, progress.url);
        progress_log.push(progress.clone());
    })
    .await;

    let summary = BatchSummary::from_results(&results);
    let csv = export_csv(&results).map_err(|e| {
        tracing::error!("Failed to export batch results: {}", e);
        batch_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    })?;
    let file_name = export_file_name(&chrono::Local::now());
    let id = state
        .exports
        .insert(StoredExport {
            file_name: file_name.clone(),
            csv,
        })
        .await;

    let report = batch_report_html(&results, &summary, &format!("/exports/{}", id), &file_name);
    let body = format!(
        "{}\n{}\n{}",
        batch_form(),
        progress_log_html(&progress_log),
        report
    );
    Ok(Html(page(BATCH_TITLE, &body)))
}

/// GET /sample.csv - Template file for batch uploads
pub async fn sample_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SAMPLE_FILE_NAME),
            ),
        ],
        SAMPLE_CSV,
    )
}

/// GET /exports/{id} - Results CSV of a finished batch run
pub async fn export_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let export = state
        .exports
        .get(&id)
        .await
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Export not found".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.csv,
    ))
}
