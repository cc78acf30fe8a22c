// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! JSON API route handlers.

use crate::app::{AppState, VERSION};
use crate::models::analysis::AnalysisResult;
use crate::models::api::AnalyzeRequest;
use crate::models::version::VersionResponse;
use axum::{extract::State, http::StatusCode, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(analyze_handler, version_handler),
    components(schemas(AnalyzeRequest, AnalysisResult, VersionResponse)),
    tags((name = "analysis", description = "Single page SEO analysis"))
)]
pub struct ApiDoc;

/// POST /api/analyze - Fetch one URL and return its SEO signals.
///
/// Transport failures are not HTTP errors: they come back as a normal record
/// with `error` set and `status_code` equal to `"Error"`.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis record", body = AnalysisResult),
        (status = 400, description = "Blank URL")
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, String)> {
    let url = payload.url.trim();
    if url.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "URL cannot be empty".to_string()));
    }

    Ok(Json(state.analyzer.analyze_url(url).await))
}

/// GET /version - Report the running version.
#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Version information", body = VersionResponse))
)]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "seo-checker".to_string(),
        version: VERSION.to_string(),
    })
}
