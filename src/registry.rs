//! Durable registry of issued panel and dataset ids.
//!
//! The registry is the only record of what this crate has created in the
//! host, so uninstall can find and tear everything down even across
//! restarts.  Each category is one JSON array of id strings under a fixed
//! pref key, mutated only by whole-list read-modify-write appends.
//!
//! An absent or unparsable stored value always reads as an empty list.
//! Losing track of already-created panels on corrupt state is preferred
//! over failing install or uninstall.

use std::sync::Arc;

use crate::prefs::PrefStore;

/// Pref key holding the installed panel ids.
pub const PANEL_IDS_KEY: &str = "home.rss.panelIds";
/// Pref key holding the created dataset ids.
pub const DATASET_IDS_KEY: &str = "home.rss.datasetIds";

/// Which of the two id lists an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCategory {
    Panel,
    Dataset,
}

impl IdCategory {
    pub fn key(self) -> &'static str {
        match self {
            IdCategory::Panel => PANEL_IDS_KEY,
            IdCategory::Dataset => DATASET_IDS_KEY,
        }
    }
}

/// Append-only id bookkeeping on top of a [`PrefStore`].
pub struct IdRegistry {
    store: Arc<dyn PrefStore>,
}

impl IdRegistry {
    pub fn new(store: Arc<dyn PrefStore>) -> Self {
        Self { store }
    }

    /// Append `id` to the category's list and persist the whole list back.
    ///
    /// This is read-modify-write without locking: concurrent appends to the
    /// same category are last-writer-wins on the whole list.  Subscriptions
    /// append sequentially, so that only matters across genuinely
    /// concurrent subscription attempts.
    pub fn append(&self, category: IdCategory, id: &str) {
        let mut ids = self.read_all(category);
        ids.push(id.to_string());
        if let Ok(encoded) = serde_json::to_string(&ids) {
            self.store.set(category.key(), &encoded);
        }
    }

    /// Read the category's full list.  Absent or corrupt state reads as
    /// empty, never as an error.
    pub fn read_all(&self, category: IdCategory) -> Vec<String> {
        self.store
            .get(category.key())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}
