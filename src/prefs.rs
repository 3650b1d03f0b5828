//! Durable scalar string storage.
//!
//! The ID registry keeps its lists as single string values under well-known
//! keys, so all it needs from the host is a flat key/value store.  Two
//! implementations ship with the crate: [`MemoryPrefs`] for embedding and
//! tests, and [`FilePrefs`], a small line-delimited store for hosts without
//! their own preference system.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Flat string key/value store with durable writes.
///
/// `set` has no failure path by contract; implementations that can fail
/// report the problem themselves and keep the in-memory view consistent.
pub trait PrefStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store.  Durable only for the lifetime of the process.
#[derive(Default)]
pub struct MemoryPrefs {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one `key<TAB>value` pair per line.
///
/// The whole file is rewritten on every `set`, through a sibling temp file
/// and an atomic rename, so a crash mid-write leaves the previous contents
/// intact.  Keys and values must not contain tabs or newlines; the registry
/// only ever stores compact JSON, which satisfies that.
pub struct FilePrefs {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FilePrefs {
    /// Open the store at `path`, loading any existing contents.  Lines that
    /// do not parse are skipped.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let mut values = HashMap::new();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                for line in contents.lines() {
                    if let Some((key, value)) = line.split_once('\t') {
                        values.insert(key.to_string(), value.to_string());
                    }
                }
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(error),
        }

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn write_out(path: &Path, values: &HashMap<String, String>) -> io::Result<()> {
        let mut contents = String::new();
        for (key, value) in values {
            contents.push_str(key);
            contents.push('\t');
            contents.push_str(value);
            contents.push('\n');
        }

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        if let Err(error) = Self::write_out(&self.path, &values) {
            tracing::warn!(path = %self.path.display(), %error, "pref write failed");
        }
    }
}
