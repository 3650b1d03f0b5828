//! Teardown of everything the crate ever created in the host.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::host::{DatasetStore, PanelHost};
use crate::prefs::PrefStore;
use crate::registry::{IdCategory, IdRegistry};
use crate::report::ErrorReport;

/// Removes all registered panels and deletes all dataset contents, driven
/// entirely by the durable id registries.
pub struct UninstallCoordinator {
    panels: Arc<dyn PanelHost>,
    datasets: Arc<dyn DatasetStore>,
    registry: IdRegistry,
}

impl UninstallCoordinator {
    pub fn new(
        panels: Arc<dyn PanelHost>,
        datasets: Arc<dyn DatasetStore>,
        prefs: Arc<dyn PrefStore>,
    ) -> Self {
        Self {
            panels,
            datasets,
            registry: IdRegistry::new(prefs),
        }
    }

    /// Tear down every panel and dataset the registries know about.
    ///
    /// Panels are uninstalled and unregistered inline.  Dataset deletions
    /// are spawned as independent tasks, each with its own error handler,
    /// so one failing dataset never blocks the rest and the shutdown path
    /// does not wait on storage.  The returned handles let an embedder
    /// block on completion if it wants to; dropping them is fine.
    ///
    /// Absent or unparsable registry state means nothing to clean up.  The
    /// registries themselves are not rewritten: full removal wipes the
    /// whole pref namespace, so ids remain listed if this is called
    /// without removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn uninstall_all(&self) -> Vec<JoinHandle<()>> {
        let panel_ids = self.registry.read_all(IdCategory::Panel);
        tracing::info!(panels = panel_ids.len(), "uninstalling panels");
        for panel_id in &panel_ids {
            self.panels.uninstall(panel_id);
            self.panels.unregister(panel_id);
        }

        let mut deletions = Vec::new();
        for dataset_id in self.registry.read_all(IdCategory::Dataset) {
            let storage = self.datasets.storage(&dataset_id);
            deletions.push(tokio::spawn(async move {
                if let Err(error) = storage.delete_all().await {
                    let mut report =
                        ErrorReport::new(format!("could not delete dataset {dataset_id}"));
                    report.push(error);
                    report.emit();
                }
            }));
        }
        deletions
    }
}
