//! Dataset synchronization.

use std::sync::Arc;

use anyhow::Result;

use crate::feed::FeedItem;
use crate::host::DatasetStore;

/// Replaces dataset contents wholesale on each refresh.
pub struct DatasetSynchronizer {
    store: Arc<dyn DatasetStore>,
}

impl DatasetSynchronizer {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self { store }
    }

    /// Replace the full contents of `dataset_id` with `items`.
    ///
    /// Two awaited steps: delete everything, then save the new items.  Not
    /// atomic: a reader racing between the two steps observes an empty
    /// dataset.  Readers are display-only, so eventual consistency is
    /// enough.  A failure in either step propagates; no rollback.
    pub async fn replace(&self, dataset_id: &str, items: &[FeedItem]) -> Result<()> {
        let storage = self.store.storage(dataset_id);
        storage.delete_all().await?;
        storage.save(items).await?;
        Ok(())
    }
}
