use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::error::StorageError;
use crate::saved::SavedWordList;

/// Durable string key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites whatever was stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Key/value pairs kept as a JSON object in a single file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&data)? {
            Value::Object(map) => Ok(Some(map)),
            _ => Err(StorageError::NotAnObject),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(mut map) = self.read_object()? else {
            return Ok(None);
        };

        Ok(map.remove(key).map(|value| match value {
            Value::String(text) => text,
            other => other.to_string(),
        }))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = match self.read_object() {
            Ok(map) => map.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Replacing unreadable storage file {}: {}", self.path.display(), e);
                Map::new()
            }
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;

        Ok(())
    }
}

/// Process-local storage, gone when the process exits
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the saved word list under a fixed key
pub struct PersistenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Never fails: absent or corrupt data reads as an empty list
    pub fn load(&self) -> SavedWordList {
        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!("No saved words stored under '{}'", self.key);
                return SavedWordList::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read saved words: {}", e);
                return SavedWordList::new();
            }
        };

        match serde_json::from_str::<SavedWordList>(&text) {
            Ok(list) => {
                let list = list.dedup();
                tracing::info!("Loaded {} saved words", list.len());
                list
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed saved words under '{}': {}", self.key, e);
                SavedWordList::new()
            }
        }
    }

    pub fn save(&self, list: &SavedWordList) -> Result<(), StorageError> {
        let text = serde_json::to_string(list)?;
        self.store.set(&self.key, &text)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
