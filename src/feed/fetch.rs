//! Feed fetching.
//!
//! One HTTP GET per call, parsed as RSS.  The fetcher is deliberately
//! best-effort: a failed transport, a non-success status, an unparsable
//! body, and a feed with zero entries all yield `None` rather than an
//! error.  Subscription simply leaves the dataset alone in that case and
//! the panel fills in on a later refresh.
//!
//! No retries and no timeout beyond what the transport applies.

use crate::feed::ParsedFeed;

/// Fetches and parses feed documents over HTTP.
///
/// Holds a shared [`reqwest::Client`] so connection pools survive across
/// subscriptions.
pub struct FeedFetcher {
    client: reqwest::Client,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// GET `url` and parse the body as a feed document.
    ///
    /// Returns `None` on any transport failure, non-success status, parse
    /// failure, or a feed with no entries.
    pub async fn fetch(&self, url: &str) -> Option<ParsedFeed> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(url, %error, "feed fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(url, status = %response.status(), "feed fetch returned non-success");
            return None;
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(url, %error, "feed body read failed");
                return None;
            }
        };

        let channel = match rss::Channel::read_from(body.as_ref()) {
            Ok(channel) => channel,
            Err(error) => {
                tracing::debug!(url, %error, "feed parse failed");
                return None;
            }
        };

        let feed = ParsedFeed::from_channel(&channel);
        if feed.entries.is_empty() {
            return None;
        }
        Some(feed)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
