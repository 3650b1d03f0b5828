//! The core data types shared across the subscription pipeline.
//!
//! `FeedItem` is the normalised record every feed entry is converted into
//! before it is written to a dataset.  `FeedDescriptor` is the ephemeral
//! handle for a feed discovered on a page; it is never persisted.

use serde::{Deserialize, Serialize};

/// A single feed entry, normalised for dataset storage.
///
/// Produced fresh on every fetch and immutable once extracted.  The order of
/// a batch of items always matches the order of the entries in the feed
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Link to the full article.
    pub url: String,
    /// Plain-text headline.
    pub title: String,
    /// Plain-text summary.
    pub description: String,
    /// URL of the first image enclosure, if the entry carried a usable one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One feed discovered on a page, as reported by the host's feed discovery.
///
/// Supplied per page load and only held for the lifetime of the page
/// session; subscribing copies what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDescriptor {
    /// URL of the feed document.
    pub href: String,
    /// Feed title, when the page advertised one.
    pub title: Option<String>,
}

impl FeedDescriptor {
    pub fn new(href: impl Into<String>, title: Option<String>) -> Self {
        Self {
            href: href.into(),
            title,
        }
    }

    /// Label shown to the user when choosing between feeds: the title when
    /// present, otherwise the URL.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }
}
