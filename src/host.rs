//! Contracts for the host collaborators the core depends on.
//!
//! The core never renders panels, stores datasets, or shows prompts itself;
//! it drives the host through these traits.  Implementations live in the
//! embedding shell (the test suite ships in-memory fakes).

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::feed::FeedItem;

/// Lazily computed panel configuration.  The host calls the provider when
/// it actually renders the panel, not at registration time.
pub type PanelOptionsProvider = Box<dyn Fn() -> PanelOptions + Send + Sync>;

/// Configuration for one home-surface panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub layout: PanelLayout,
    pub views: Vec<PanelView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelLayout {
    Frame,
}

/// One view inside a panel, bound to the dataset it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub dataset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    List,
}

/// The host's panel registration and navigation surface.
///
/// All operations are fire-and-forget from the core's point of view; the
/// host owns any error reporting for its own rendering layer.
pub trait PanelHost: Send + Sync {
    /// Register a panel configuration under `panel_id`.
    fn register(&self, panel_id: &str, options: PanelOptionsProvider);
    /// Add the registered panel to the visible panel set.
    fn install(&self, panel_id: &str);
    /// Remove the panel from the visible panel set.
    fn uninstall(&self, panel_id: &str);
    /// Drop the panel registration.
    fn unregister(&self, panel_id: &str);
    /// Navigate to the panel.
    fn open(&self, panel_id: &str);
}

/// The host's dataset storage engine, addressed by dataset id.
pub trait DatasetStore: Send + Sync {
    /// Obtain a write handle for one dataset.  Datasets are created
    /// implicitly on first write.
    fn storage(&self, dataset_id: &str) -> Box<dyn DatasetStorage>;
}

/// Write handle for a single dataset.
#[async_trait]
pub trait DatasetStorage: Send + Sync {
    /// Delete every item currently in the dataset.
    async fn delete_all(&self) -> Result<()>;
    /// Append `items` to the dataset.
    async fn save(&self, items: &[FeedItem]) -> Result<()>;
}

/// Single-choice selection prompt.  Resolves to the selected index, or
/// `None` when the user dismisses the prompt.
#[async_trait]
pub trait FeedPrompt: Send + Sync {
    async fn choose(&self, labels: &[String]) -> Option<usize>;
}

/// A page-action button the host shows in its URL bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAction {
    pub icon: String,
    pub title: String,
}

/// Handle for a page action previously added via [`PageActionHost::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageActionId(pub u64);

/// The host's page-action surface.
pub trait PageActionHost: Send + Sync {
    fn add(&self, action: PageAction) -> PageActionId;
    fn remove(&self, id: PageActionId);
}
