//! Structured view of a parsed feed document.
//!
//! The fetcher parses raw XML with the [`rss`] crate and immediately converts
//! the channel into these owned types.  Keeping the conversion separate from
//! item extraction means the extractor stays pure and tests can build
//! entries directly, enclosures and all, without going through XML.

use rss::Channel;

/// A parsed feed: its title plus entries in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<ParsedEntry>,
}

/// One feed entry as the parser saw it.  Every field is optional; the
/// extractor decides what a usable entry looks like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedEntry {
    pub link: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Media attachments in document order: the RSS `<enclosure>` element
    /// first, then any Media RSS `media:content` / `media:thumbnail`
    /// elements.
    pub enclosures: Vec<EnclosureRef>,
}

/// A media attachment reference.  Feeds routinely omit one or both
/// attributes; such enclosures are kept here and filtered during
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnclosureRef {
    pub url: Option<String>,
    pub mime_type: Option<String>,
}

impl ParsedFeed {
    /// Convert an [`rss::Channel`] into the owned feed model, preserving
    /// entry order.
    pub fn from_channel(channel: &Channel) -> Self {
        let entries = channel
            .items()
            .iter()
            .map(|item| ParsedEntry {
                link: item.link().map(String::from),
                title: item.title().map(String::from),
                summary: item.description().map(String::from),
                enclosures: entry_enclosures(item),
            })
            .collect();

        Self {
            title: non_empty(channel.title()),
            entries,
        }
    }
}

/// Collect an entry's media attachments in document order.
fn entry_enclosures(item: &rss::Item) -> Vec<EnclosureRef> {
    let mut enclosures = Vec::new();

    if let Some(enc) = item.enclosure() {
        enclosures.push(EnclosureRef {
            url: non_empty(enc.url()),
            mime_type: non_empty(enc.mime_type()),
        });
    }

    // Media RSS extensions land in the channel's extension map under the
    // "media" prefix.
    if let Some(media) = item.extensions().get("media") {
        for element in ["content", "thumbnail"] {
            for ext in media.get(element).into_iter().flatten() {
                enclosures.push(EnclosureRef {
                    url: ext.attrs().get("url").cloned(),
                    mime_type: ext.attrs().get("type").cloned(),
                });
            }
        }
    }

    enclosures
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
