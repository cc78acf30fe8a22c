// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::analysis::{AnalysisResult, HttpStatus};
use crate::services::extract::extract_signals;
use reqwest::redirect::Policy;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// Browser-like User-Agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Total time allowed for one fetch, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect hops followed before the fetch counts as failed
pub const MAX_REDIRECTS: usize = 10;

/// Anything that turns a URL into an [`AnalysisResult`] without failing
pub trait PageAnalyzer {
    fn analyze(&self, url: &str) -> impl Future<Output = AnalysisResult> + Send;
}

/// Fetches pages over HTTP and extracts their SEO signals
#[derive(Debug, Clone)]
pub struct SeoAnalyzer {
    client: reqwest::Client,
}

impl SeoAnalyzer {
    /// Create an analyzer with the fixed user agent, timeout and redirect policy
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and extract its signals. Transport failures become failure records.
    pub async fn analyze_url(&self, url: &str) -> AnalysisResult {
        let url = normalize_url(url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return failure(url, &e),
        };

        let status = response.status().as_u16();
        let final_url = response.url().clone();

        // 4xx/5xx pages are analyzed like any other page
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return failure(url, &e),
        };

        tracing::debug!(%url, %final_url, status, "fetched page");

        let signals = extract_signals(&body, &final_url);
        let title_length = char_length(signals.meta_title.as_deref());
        let desc_length = char_length(signals.meta_description.as_deref());

        AnalysisResult {
            url,
            status_code: HttpStatus::Code(status),
            canonical_url: signals.canonical_url,
            is_self_referring: signals.is_self_referring,
            noindex_found: signals.noindex_found,
            nofollow_found: signals.nofollow_found,
            meta_title: signals.meta_title,
            title_length,
            meta_description: signals.meta_description,
            desc_length,
            error: None,
        }
    }
}

impl PageAnalyzer for SeoAnalyzer {
    async fn analyze(&self, url: &str) -> AnalysisResult {
        self.analyze_url(url).await
    }
}

/// Prepend `https://` when the URL has no http(s) scheme
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    let has_scheme = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

fn failure(url: String, error: &reqwest::Error) -> AnalysisResult {
    let description = describe_error(error);
    tracing::warn!(%url, error = %description, "failed to fetch page");
    AnalysisResult::failure(url, description)
}

/// Render an error with its full source chain, e.g. "error sending request: dns error: ..."
pub fn describe_error(error: &dyn Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // reqwest repeats some causes in its own message
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

fn char_length(text: Option<&str>) -> usize {
    text.map_or(0, |text| text.chars().count())
}
