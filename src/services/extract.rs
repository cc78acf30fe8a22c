// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! HTML signal extraction.
//!
//! Parsing is delegated to `scraper`, which recovers from malformed markup the
//! way browsers do, so nothing in this module can fail on bad input. Missing
//! elements simply come back as "not found" values.

use crate::models::analysis::Canonical;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Signals read from a page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    pub canonical_url: Canonical,
    pub is_self_referring: bool,
    pub noindex_found: bool,
    pub nofollow_found: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

/// Extract SEO signals from `html` served at `final_url` (the post-redirect URL)
pub fn extract_signals(html: &str, final_url: &Url) -> PageSignals {
    let document = Html::parse_document(html);

    let canonical_url = find_canonical(&document, final_url);
    let is_self_referring = match &canonical_url {
        Canonical::Found(canonical) => same_page(canonical, final_url.as_str()),
        _ => false,
    };

    let robots = first_meta(&document, "robots")
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_lowercase)
        .unwrap_or_default();

    PageSignals {
        canonical_url,
        is_self_referring,
        noindex_found: robots.contains("noindex"),
        nofollow_found: robots.contains("nofollow"),
        meta_title: extract_title(&document),
        meta_description: first_meta(&document, "description")
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| content.trim().to_string()),
    }
}

/// First `<link>` whose `rel` tokens include `canonical`, resolved to an absolute URL
fn find_canonical(document: &Html, base: &Url) -> Canonical {
    let Ok(selector) = Selector::parse("link[rel]") else {
        return Canonical::NotFound;
    };

    let Some(link) = document.select(&selector).find(|link| {
        link.value()
            .attr("rel")
            .is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
    }) else {
        return Canonical::NotFound;
    };

    link.value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .and_then(|href| base.join(href).ok())
        .map(|resolved| Canonical::Found(resolved.to_string()))
        .unwrap_or(Canonical::NotFound)
}

/// Compare two URLs ignoring trailing slashes
pub fn same_page(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

/// First `<meta>` with the given `name`; later duplicates are ignored
fn first_meta<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("meta[name]").ok()?;
    document.select(&selector).find(|meta| {
        meta.value()
            .attr("name")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(name))
    })
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
}
