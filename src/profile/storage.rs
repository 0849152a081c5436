//! Key-value storage backends
//!
//! The profile is kept under a single key in a string-to-string store that
//! behaves like the browser's `localStorage`. The front-end plugs the real
//! `localStorage` in through [`KeyValueStorage`]; native code uses
//! [`FileStorage`], tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ProfileError, ProfileResult};

/// Synchronous string-to-string storage
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> ProfileResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> ProfileResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> ProfileResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> ProfileResult<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write, like a full or locked-down browser store
    pub fn read_only() -> Self {
        Self {
            items: RefCell::default(),
            read_only: true,
        }
    }

    /// Seed a raw value, bypassing the read-only flag
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> ProfileResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ProfileResult<()> {
        if self.read_only {
            return Err(ProfileError::Storage("storage is read-only".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one JSON object of all keys in `<dir>/storage.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub const FILE_NAME: &'static str = "storage.json";

    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ProfileResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            ProfileError::Storage(format!("corrupt storage file {:?}: {}", self.path, e))
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> ProfileResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> ProfileResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&items)
            .map_err(|e| ProfileError::Serialization(e.to_string()))?;

        // Write to a sibling and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(key, path = ?self.path, "stored item");
        Ok(())
    }
}
