//! homefeed — feed-subscription pipeline and panel-lifecycle registry for
//! home-surface RSS panels.
//!
//! A user subscribing to a page's feed gets a persistent, named panel of
//! feed items on the host's home surface; uninstalling removes every panel
//! and cached dataset, even across restarts.
//!
//! ## Architecture overview
//!
//! ```text
//! page-show ──► WindowController ──► SubscriptionManager
//!                 (session.rs)          (subscribe.rs)
//!                                            │
//!                    mint ids ───► IdRegistry (registry.rs ► prefs.rs)
//!                    register ───► PanelHost             (host.rs)
//!                    fetch ──────► FeedFetcher            (feed/)
//!                    extract ────► extract_items          (feed/)
//!                    sync ───────► DatasetSynchronizer   (dataset.rs)
//!
//! teardown ──► UninstallCoordinator (uninstall.rs) ──► both registries
//! ```
//!
//! * **`feed/`** — item types, parsed-feed model, HTTP fetcher, and the
//!   pure item extractor.
//! * **`host`** — traits for the collaborators the host shell provides:
//!   panel registry, dataset store, prompt, page actions.
//! * **`prefs`** / **`registry`** — durable scalar storage and the
//!   append-only id lists built on it.
//! * **`dataset`** — clear-then-write dataset replacement.
//! * **`subscribe`** — the orchestration: ids → registry → panel → fetch →
//!   sync → open, reporting chain failures without rolling back.
//! * **`uninstall`** — registry-driven teardown with fail-isolated
//!   dataset deletion.
//! * **`session`** — per-window page session owning the page action; its
//!   `subscribe_requested` and the coordinator's `uninstall_all` are the
//!   only entry points the host shell needs.
//! * **`report`** — aggregated diagnostics for the async chains.

pub mod dataset;
pub mod feed;
pub mod host;
pub mod prefs;
pub mod registry;
pub mod report;
pub mod session;
pub mod subscribe;
pub mod uninstall;

pub use dataset::DatasetSynchronizer;
pub use feed::{extract_items, FeedDescriptor, FeedFetcher, FeedItem};
pub use prefs::{FilePrefs, MemoryPrefs, PrefStore};
pub use registry::{IdCategory, IdRegistry};
pub use session::WindowController;
pub use subscribe::{Subscription, SubscriptionManager};
pub use uninstall::UninstallCoordinator;
