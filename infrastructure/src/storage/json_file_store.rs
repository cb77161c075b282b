//! JSON file key-value store
//!
//! All entries live in one JSON object file. The file is read once on open
//! and rewritten on every `set` (write to a sibling temp file, then
//! rename), so a crash mid-write leaves the previous snapshot intact.

use quotebook_application::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Key-value store persisted as a single JSON object file.
///
/// Thread-safe via `Mutex<BTreeMap>`; the map is ordered so the file
/// content is stable.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// Parent directories are created. An unreadable or malformed file is
    /// treated as empty and will be overwritten by the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring malformed storage file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        debug!("Opened storage {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }

    /// Get the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }

    fn write_file(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.write_file(&entries) {
            // Keep memory consistent with disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("quotes", "[]").unwrap();
        store.set("selectedCategory", "Life").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("quotes").unwrap(), Some("[]".to_string()));
        assert_eq!(
            reopened.get("selectedCategory").unwrap(),
            Some("Life".to_string())
        );
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_malformed_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("quotes").unwrap(), None);

        store.set("quotes", "[]").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("quotes").map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("quotes", "old").unwrap();

        // A directory where the temp file should go makes every write fail
        fs::create_dir(dir.path().join("storage.json.tmp")).unwrap();

        assert!(store.set("quotes", "new").is_err());
        assert!(store.set("selectedCategory", "Life").is_err());

        assert_eq!(store.get("quotes").unwrap(), Some("old".to_string()));
        assert_eq!(store.get("selectedCategory").unwrap(), None);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("quotes").unwrap(), Some("old".to_string()));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        assert!(!dir.path().join("storage.json.tmp").exists());
    }
}
