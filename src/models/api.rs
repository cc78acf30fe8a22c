// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to analyze a single URL
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// URL or bare domain; `https://` is assumed when no scheme is given
    #[schema(example = "example.com")]
    pub url: String,
}

/// Form body of the single-URL page
#[derive(Debug, Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub url: String,
}
