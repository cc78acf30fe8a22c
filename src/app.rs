// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state and router construction.

use crate::routes::api::{self, ApiDoc};
use crate::routes::ui;
use crate::services::analyzer::SeoAnalyzer;
use crate::services::exports::ExportStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SEO_CHECKER_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SEO_CHECKER_VERSION");

/// Shared state injected into every route handler via `State<AppState>`.
///
/// Everything a flow needs is passed in here; the handlers keep no globals.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SeoAnalyzer>,
    /// Finished batch exports available under `/exports/{id}`
    pub exports: Arc<ExportStore>,
}

impl AppState {
    pub fn new(analyzer: SeoAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            exports: Arc::new(ExportStore::new()),
        }
    }
}

/// Build the Axum application router: the two UI modes, downloads, the JSON API
/// and its Swagger UI.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::single_page_handler))
        .route("/check", post(ui::check_handler))
        .route(
            "/batch",
            get(ui::batch_page_handler).post(ui::batch_handler),
        )
        .route("/sample.csv", get(ui::sample_handler))
        .route("/exports/{id}", get(ui::export_handler))
        .route("/api/analyze", post(api::analyze_handler))
        .route("/version", get(api::version_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
