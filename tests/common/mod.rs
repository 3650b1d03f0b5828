//! Shared in-memory fakes for the host collaborators, used by every
//! integration harness.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Once};

use anyhow::{bail, Result};
use async_trait::async_trait;

use homefeed::feed::FeedItem;
use homefeed::host::{
    DatasetStore, DatasetStorage, FeedPrompt, PageAction, PageActionHost, PageActionId,
    PanelHost, PanelOptions, PanelOptionsProvider,
};
use homefeed::prefs::MemoryPrefs;
use homefeed::subscribe::SubscriptionManager;
use homefeed::uninstall::UninstallCoordinator;

static INIT_TRACING: Once = Once::new();

/// Route crate diagnostics into the test output, once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

// ---------------------------------------------------------------------------
// Panel host fake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Registered(String),
    Installed(String),
    Uninstalled(String),
    Unregistered(String),
    Opened(String),
}

/// Records every panel call in order and keeps the registered options
/// providers so tests can evaluate them lazily, the way a real host would.
#[derive(Default)]
pub struct FakePanelHost {
    pub events: Mutex<Vec<PanelEvent>>,
    providers: Mutex<HashMap<String, PanelOptionsProvider>>,
}

impl FakePanelHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<PanelEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Evaluate the stored options provider for `panel_id`.
    pub fn options_for(&self, panel_id: &str) -> Option<PanelOptions> {
        self.providers
            .lock()
            .unwrap()
            .get(panel_id)
            .map(|provider| provider())
    }

    pub fn opened(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PanelEvent::Opened(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl PanelHost for FakePanelHost {
    fn register(&self, panel_id: &str, options: PanelOptionsProvider) {
        self.providers
            .lock()
            .unwrap()
            .insert(panel_id.to_string(), options);
        self.events
            .lock()
            .unwrap()
            .push(PanelEvent::Registered(panel_id.to_string()));
    }

    fn install(&self, panel_id: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PanelEvent::Installed(panel_id.to_string()));
    }

    fn uninstall(&self, panel_id: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PanelEvent::Uninstalled(panel_id.to_string()));
    }

    fn unregister(&self, panel_id: &str) {
        self.providers.lock().unwrap().remove(panel_id);
        self.events
            .lock()
            .unwrap()
            .push(PanelEvent::Unregistered(panel_id.to_string()));
    }

    fn open(&self, panel_id: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PanelEvent::Opened(panel_id.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Dataset store fake
// ---------------------------------------------------------------------------

/// In-memory dataset store.  `save` extends existing contents, so the
/// synchronizer's delete-then-save discipline is what makes a replace a
/// replace.  Individual datasets can be made to fail either operation.
#[derive(Default)]
pub struct FakeDatasetStore {
    datasets: Arc<Mutex<HashMap<String, Vec<FeedItem>>>>,
    fail_delete: Mutex<HashSet<String>>,
    fail_save: Mutex<HashSet<String>>,
    fail_all_saves: AtomicBool,
}

impl FakeDatasetStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn contents(&self, dataset_id: &str) -> Option<Vec<FeedItem>> {
        self.datasets.lock().unwrap().get(dataset_id).cloned()
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets.lock().unwrap().len()
    }

    pub fn seed(&self, dataset_id: &str, items: Vec<FeedItem>) {
        self.datasets
            .lock()
            .unwrap()
            .insert(dataset_id.to_string(), items);
    }

    pub fn fail_delete_for(&self, dataset_id: &str) {
        self.fail_delete
            .lock()
            .unwrap()
            .insert(dataset_id.to_string());
    }

    pub fn fail_save_for(&self, dataset_id: &str) {
        self.fail_save
            .lock()
            .unwrap()
            .insert(dataset_id.to_string());
    }

    /// Make every save fail, regardless of dataset id.  Needed because
    /// subscription mints its dataset id internally.
    pub fn fail_all_saves(&self) {
        self.fail_all_saves.store(true, Ordering::SeqCst);
    }
}

impl DatasetStore for FakeDatasetStore {
    fn storage(&self, dataset_id: &str) -> Box<dyn DatasetStorage> {
        Box::new(FakeDatasetStorage {
            dataset_id: dataset_id.to_string(),
            datasets: Arc::clone(&self.datasets),
            fail_delete: self.fail_delete.lock().unwrap().contains(dataset_id),
            fail_save: self.fail_save.lock().unwrap().contains(dataset_id)
                || self.fail_all_saves.load(Ordering::SeqCst),
        })
    }
}

struct FakeDatasetStorage {
    dataset_id: String,
    datasets: Arc<Mutex<HashMap<String, Vec<FeedItem>>>>,
    fail_delete: bool,
    fail_save: bool,
}

#[async_trait]
impl DatasetStorage for FakeDatasetStorage {
    async fn delete_all(&self) -> Result<()> {
        if self.fail_delete {
            bail!("storage backend fault deleting {}", self.dataset_id);
        }
        self.datasets.lock().unwrap().remove(&self.dataset_id);
        Ok(())
    }

    async fn save(&self, items: &[FeedItem]) -> Result<()> {
        if self.fail_save {
            bail!("storage quota exceeded saving {}", self.dataset_id);
        }
        self.datasets
            .lock()
            .unwrap()
            .entry(self.dataset_id.clone())
            .or_default()
            .extend(items.iter().cloned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Prompt fake
// ---------------------------------------------------------------------------

/// Prompt that resolves to a fixed selection and records what it showed.
pub struct FakePrompt {
    pub selection: Option<usize>,
    pub shown: Mutex<Vec<Vec<String>>>,
}

impl FakePrompt {
    pub fn selecting(index: usize) -> Arc<Self> {
        Arc::new(Self {
            selection: Some(index),
            shown: Mutex::new(Vec::new()),
        })
    }

    pub fn dismissed() -> Arc<Self> {
        Arc::new(Self {
            selection: None,
            shown: Mutex::new(Vec::new()),
        })
    }

    pub fn times_shown(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedPrompt for FakePrompt {
    async fn choose(&self, labels: &[String]) -> Option<usize> {
        self.shown.lock().unwrap().push(labels.to_vec());
        self.selection
    }
}

// ---------------------------------------------------------------------------
// Page action fake
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakePageActionHost {
    next_id: AtomicU64,
    pub active: Mutex<HashMap<PageActionId, PageAction>>,
    pub removed: Mutex<Vec<PageActionId>>,
}

impl FakePageActionHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn active_count(&self) -> usize {
        self.active.lock().unwrap().len()
    }
}

impl PageActionHost for FakePageActionHost {
    fn add(&self, action: PageAction) -> PageActionId {
        let id = PageActionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.active.lock().unwrap().insert(id, action);
        id
    }

    fn remove(&self, id: PageActionId) {
        self.active.lock().unwrap().remove(&id);
        self.removed.lock().unwrap().push(id);
    }
}

// ---------------------------------------------------------------------------
// Wiring helpers
// ---------------------------------------------------------------------------

pub struct Fixture {
    pub panels: Arc<FakePanelHost>,
    pub datasets: Arc<FakeDatasetStore>,
    pub prefs: Arc<MemoryPrefs>,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        Self {
            panels: FakePanelHost::new(),
            datasets: FakeDatasetStore::new(),
            prefs: Arc::new(MemoryPrefs::new()),
        }
    }

    pub fn manager(&self) -> SubscriptionManager {
        SubscriptionManager::new(
            self.panels.clone(),
            self.datasets.clone(),
            self.prefs.clone(),
        )
    }

    pub fn coordinator(&self) -> UninstallCoordinator {
        UninstallCoordinator::new(
            self.panels.clone(),
            self.datasets.clone(),
            self.prefs.clone(),
        )
    }
}

/// Item shorthand for assertions.
pub fn item(url: &str, title: &str, description: &str) -> FeedItem {
    FeedItem {
        url: url.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
    }
}
