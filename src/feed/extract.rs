//! Item extraction.
//!
//! Converts a [`ParsedFeed`] into the normalised [`FeedItem`] sequence that
//! gets written to a dataset.  This is a pure function with no failure
//! modes: malformed entries are filtered, never thrown.

use crate::feed::{EnclosureRef, FeedItem, ParsedEntry, ParsedFeed};

/// Extract dataset items from a parsed feed, preserving entry order.
///
/// Entries without a link cannot be rendered as list rows and are skipped.
/// Missing titles and summaries become empty strings.
pub fn extract_items(feed: &ParsedFeed) -> Vec<FeedItem> {
    feed.entries.iter().filter_map(entry_to_item).collect()
}

fn entry_to_item(entry: &ParsedEntry) -> Option<FeedItem> {
    let url = entry.link.clone()?;
    Some(FeedItem {
        url,
        title: entry.title.clone().unwrap_or_default(),
        description: entry.summary.clone().unwrap_or_default(),
        image_url: first_image_enclosure(&entry.enclosures),
    })
}

/// Scan enclosures in order and take the first image.
///
/// Enclosures missing either attribute are ambiguous and ignored.  The
/// first `image/*` match wins; later, possibly larger images are not
/// considered.
fn first_image_enclosure(enclosures: &[EnclosureRef]) -> Option<String> {
    for enclosure in enclosures {
        let (Some(url), Some(mime_type)) = (&enclosure.url, &enclosure.mime_type) else {
            continue;
        };
        if mime_type.starts_with("image/") {
            return Some(url.clone());
        }
    }
    None
}
