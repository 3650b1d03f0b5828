//! Subscription orchestration.
//!
//! `subscribe` runs the whole pipeline for one feed: mint ids, record them
//! durably, register and install the panel, then fetch the feed and fill
//! the dataset.  The durable record comes first so a crash at any later
//! point still lets [`crate::uninstall::UninstallCoordinator`] find and
//! remove whatever was created.

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::dataset::DatasetSynchronizer;
use crate::feed::{extract_items, FeedDescriptor, FeedFetcher};
use crate::host::{
    DatasetStore, FeedPrompt, PanelHost, PanelLayout, PanelOptions, PanelView, ViewType,
};
use crate::prefs::PrefStore;
use crate::registry::{IdCategory, IdRegistry};
use crate::report::ErrorReport;

/// The id pair minted for one subscription.  Never persisted as a record;
/// the durable form is the two registry entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub panel_id: String,
    pub dataset_id: String,
}

/// Orchestrates feed subscriptions against the host collaborators.
pub struct SubscriptionManager {
    panels: Arc<dyn PanelHost>,
    registry: IdRegistry,
    synchronizer: DatasetSynchronizer,
    fetcher: FeedFetcher,
}

impl SubscriptionManager {
    pub fn new(
        panels: Arc<dyn PanelHost>,
        datasets: Arc<dyn DatasetStore>,
        prefs: Arc<dyn PrefStore>,
    ) -> Self {
        Self {
            panels,
            registry: IdRegistry::new(prefs),
            synchronizer: DatasetSynchronizer::new(datasets),
            fetcher: FeedFetcher::new(),
        }
    }

    /// Subscribe to `feed`: create a panel backed by a fresh dataset and
    /// fill it with the feed's current items.
    ///
    /// Failures in the fetch/extract/sync chain are reported as
    /// diagnostics, not returned; the panel stays installed with whatever
    /// contents the dataset has and self-corrects on the next refresh.
    pub async fn subscribe(&self, feed: &FeedDescriptor) -> Subscription {
        let panel_id = Uuid::new_v4().to_string();
        let dataset_id = Uuid::new_v4().to_string();
        tracing::info!(href = %feed.href, %panel_id, %dataset_id, "subscribing to feed");

        // Durable record before any host-visible registration, so cleanup
        // can find these ids even if the steps below never complete.
        self.registry.append(IdCategory::Panel, &panel_id);
        self.registry.append(IdCategory::Dataset, &dataset_id);

        let title = feed.title.clone();
        let dataset = dataset_id.clone();
        self.panels.register(
            &panel_id,
            Box::new(move || PanelOptions {
                title: title.clone(),
                layout: PanelLayout::Frame,
                views: vec![PanelView {
                    view_type: ViewType::List,
                    dataset: dataset.clone(),
                }],
            }),
        );
        self.panels.install(&panel_id);

        match self.sync_feed(&feed.href, &dataset_id).await {
            Ok(true) => self.panels.open(&panel_id),
            Ok(false) => {}
            Err(error) => {
                let mut report =
                    ErrorReport::new(format!("subscription to {} could not sync items", feed.href));
                report.push(error);
                report.emit();
            }
        }

        Subscription {
            panel_id,
            dataset_id,
        }
    }

    /// Fetch `href` and, when it parses to a non-empty feed, replace the
    /// dataset's contents.  Returns whether a replace happened; a feed
    /// that fetches to nothing is a silent no-op.
    async fn sync_feed(&self, href: &str, dataset_id: &str) -> Result<bool> {
        let Some(feed) = self.fetcher.fetch(href).await else {
            return Ok(false);
        };
        let items = extract_items(&feed);
        self.synchronizer.replace(dataset_id, &items).await?;
        Ok(true)
    }

    /// Let the user pick one of `candidates`, then subscribe to it.
    ///
    /// A single candidate skips the prompt.  A dismissed prompt (or an
    /// empty candidate list) subscribes to nothing.
    pub async fn choose_and_subscribe(
        &self,
        prompt: &dyn FeedPrompt,
        candidates: &[FeedDescriptor],
    ) -> Option<Subscription> {
        match candidates {
            [] => None,
            [only] => Some(self.subscribe(only).await),
            _ => {
                let labels: Vec<String> =
                    candidates.iter().map(|c| c.label().to_string()).collect();
                let index = prompt.choose(&labels).await?;
                let chosen = candidates.get(index)?;
                Some(self.subscribe(chosen).await)
            }
        }
    }
}
