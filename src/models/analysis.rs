// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// Sentinel shown for the canonical of a page without a canonical link
pub const CANONICAL_NOT_FOUND: &str = "Not found";

/// Sentinel used for status and canonical when the fetch itself failed
pub const ERROR_SENTINEL: &str = "Error";

/// Final HTTP status of a fetch, or the failure marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Code(u16),
    Error,
}

impl HttpStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, HttpStatus::Code(200))
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpStatus::Code(code) => write!(f, "{}", code),
            HttpStatus::Error => write!(f, "{}", ERROR_SENTINEL),
        }
    }
}

impl Serialize for HttpStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HttpStatus::Code(code) => serializer.serialize_u16(*code),
            HttpStatus::Error => serializer.serialize_str(ERROR_SENTINEL),
        }
    }
}

/// Canonical link of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical {
    /// Absolute URL resolved from the link's `href`
    Found(String),
    NotFound,
    Error,
}

impl Canonical {
    pub fn as_str(&self) -> &str {
        match self {
            Canonical::Found(url) => url,
            Canonical::NotFound => CANONICAL_NOT_FOUND,
            Canonical::Error => ERROR_SENTINEL,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Canonical::Found(_))
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Canonical {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// SEO signals extracted from one URL.
///
/// Either the extraction fields are populated and `error` is `None`, or
/// `error` is set and every other field holds its failure default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnalysisResult {
    /// The normalized URL that was requested
    pub url: String,
    /// Final status after redirects, or `"Error"`
    #[schema(value_type = Value, example = 200)]
    pub status_code: HttpStatus,
    /// Absolute canonical URL, `"Not found"` or `"Error"`
    #[schema(value_type = String, example = "https://example.com/")]
    pub canonical_url: Canonical,
    pub is_self_referring: bool,
    pub noindex_found: bool,
    pub nofollow_found: bool,
    pub meta_title: Option<String>,
    pub title_length: usize,
    pub meta_description: Option<String>,
    pub desc_length: usize,
    /// Transport failure description; presence marks the record as failed
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Build the record for a URL whose fetch failed
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: HttpStatus::Error,
            canonical_url: Canonical::Error,
            is_self_referring: false,
            noindex_found: false,
            nofollow_found: false,
            meta_title: None,
            title_length: 0,
            meta_description: None,
            desc_length: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// A title that is absent or blank counts as missing
    pub fn is_title_missing(&self) -> bool {
        self.meta_title.as_deref().map_or(true, str::is_empty)
    }

    /// Canonical present (or unknown after a failed fetch) and not pointing at the page itself
    pub fn has_canonical_issue(&self) -> bool {
        !matches!(self.canonical_url, Canonical::NotFound) && !self.is_self_referring
    }
}
