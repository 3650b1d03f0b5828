//! Feed handling: fetch, parse, and item extraction.
//!
//! The pipeline runs in three stages, each in its own sub-module:
//!
//! 1. [`FeedFetcher`] GETs the feed URL and parses the body into a
//!    [`ParsedFeed`] (best-effort; yields `None` rather than errors).
//! 2. [`extract_items`] turns the parsed entries into normalised
//!    [`FeedItem`]s, applying the image-enclosure policy.
//! 3. The caller hands the items to the dataset synchronizer.

mod extract;
mod fetch;
mod item;
mod parsed;

pub use extract::extract_items;
pub use fetch::FeedFetcher;
pub use item::{FeedDescriptor, FeedItem};
pub use parsed::{EnclosureRef, ParsedEntry, ParsedFeed};
