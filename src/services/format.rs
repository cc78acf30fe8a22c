// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Display classification of analysis fields.
//!
//! These functions only decide *what* to show (label and color class); the
//! HTML and terminal renderers decide *how*.

use crate::models::analysis::{Canonical, HttpStatus};
use std::fmt;
use std::ops::RangeInclusive;

/// Characters of title/description text shown before truncation
pub const DISPLAY_LIMIT: usize = 100;

/// Recommended title length in characters
pub const TITLE_RANGE: RangeInclusive<usize> = 30..=60;

/// Recommended meta description length in characters
pub const DESCRIPTION_RANGE: RangeInclusive<usize> = 120..=160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeClass {
    Good,
    Bad,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: BadgeClass,
    pub label: String,
}

impl Badge {
    fn new(class: BadgeClass, label: impl Into<String>) -> Self {
        Self {
            class,
            label: label.into(),
        }
    }
}

/// Canonical classes; exactly one applies to any record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalStatus {
    NotFound,
    SelfReferring,
    NonSelfReferring,
}

impl CanonicalStatus {
    pub fn classify(canonical: &Canonical, is_self_referring: bool) -> Self {
        match canonical {
            Canonical::NotFound => CanonicalStatus::NotFound,
            _ if is_self_referring => CanonicalStatus::SelfReferring,
            _ => CanonicalStatus::NonSelfReferring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Title,
    Description,
}

impl MetaField {
    pub fn recommended_range(&self) -> RangeInclusive<usize> {
        match self {
            MetaField::Title => TITLE_RANGE,
            MetaField::Description => DESCRIPTION_RANGE,
        }
    }

    /// Good inside the recommended band, warning anywhere outside it
    pub fn length_class(&self, length: usize) -> BadgeClass {
        if self.recommended_range().contains(&length) {
            BadgeClass::Good
        } else {
            BadgeClass::Warning
        }
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaField::Title => write!(f, "title"),
            MetaField::Description => write!(f, "description"),
        }
    }
}

/// Title or description prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaDisplay {
    Present {
        /// Content cut to [`DISPLAY_LIMIT`] characters, with `...` when cut
        text: String,
        length: usize,
        class: BadgeClass,
    },
    Missing {
        field: MetaField,
    },
}

pub fn status_badge(status: &HttpStatus) -> Badge {
    let class = if status.is_ok() {
        BadgeClass::Good
    } else {
        BadgeClass::Bad
    };
    Badge::new(class, status.to_string())
}

pub fn canonical_badge(canonical: &Canonical, is_self_referring: bool) -> Badge {
    match CanonicalStatus::classify(canonical, is_self_referring) {
        CanonicalStatus::NotFound => Badge::new(BadgeClass::Bad, "Not Found"),
        CanonicalStatus::SelfReferring => Badge::new(BadgeClass::Good, "Self-referring"),
        CanonicalStatus::NonSelfReferring => Badge::new(BadgeClass::Bad, "Non self-referring"),
    }
}

/// A robots directive being present is the warning case
pub fn directive_badge(found: bool) -> Badge {
    if found {
        Badge::new(BadgeClass::Bad, "Present")
    } else {
        Badge::new(BadgeClass::Good, "Not Present")
    }
}

pub fn noindex_badge(noindex_found: bool) -> Badge {
    directive_badge(noindex_found)
}

pub fn nofollow_badge(nofollow_found: bool) -> Badge {
    directive_badge(nofollow_found)
}

pub fn meta_display(content: Option<&str>, length: usize, field: MetaField) -> MetaDisplay {
    match content.filter(|content| !content.is_empty()) {
        Some(content) => MetaDisplay::Present {
            text: truncate(content, DISPLAY_LIMIT),
            length,
            class: field.length_class(length),
        },
        None => MetaDisplay::Missing { field },
    }
}

/// Cut `text` to `limit` characters, appending `...` when anything was dropped
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
