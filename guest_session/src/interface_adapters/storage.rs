use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::KeyValueStore;

// In-memory storage adapter, shared by cloning.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    pub slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let slots = self.slots.lock().map_err(|_| "storage lock poisoned".to_string())?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut slots = self.slots.lock().map_err(|_| "storage lock poisoned".to_string())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut slots = self.slots.lock().map_err(|_| "storage lock poisoned".to_string())?;
        slots.remove(key);
        Ok(())
    }
}

/// Persistent storage adapter backed by a single JSON object on disk.
///
/// Every write rewrites the whole file. Concurrent writers from other
/// processes are not coordinated; the last one to finish wins.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| format!("storage file {} is corrupt: {err}", self.path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(format!("failed to read {}: {err}", self.path.display())),
        }
    }

    fn persist(&self, slots: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create {}: {err}", parent.display()))?;
        }

        let encoded = serde_json::to_string_pretty(slots)
            .map_err(|err| format!("failed to encode storage: {err}"))?;

        // Write to a sibling file first so a crash never leaves half a document.
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, encoded)
            .map_err(|err| format!("failed to write {}: {err}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .map_err(|err| format!("failed to replace {}: {err}", self.path.display()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut slots = self.load()?;
        slots.insert(key.to_string(), value.to_string());
        self.persist(&slots)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut slots = self.load()?;
        if slots.remove(key).is_some() {
            self.persist(&slots)?;
        }
        Ok(())
    }
}
