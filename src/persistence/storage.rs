use crate::persistence::files::{atomic_write, read_file};
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Flat string-keyed storage for scalar values and serialized blobs.
///
/// Reads never fail: a missing key is `None`. Writes are applied immediately.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk, rewritten atomically on every `set`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    /// Set when a bad file could not be moved aside; it is never overwritten
    read_only: bool,
}

/// `<path>.bak`, next to the original
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Move a file we could not load out of the way. Returns false if it is still in place.
fn set_aside(path: &Path) -> bool {
    let backup = backup_path(path);
    match fs::rename(path, &backup) {
        Ok(()) => {
            warn!(path = %path.display(), backup = %backup.display(), "kept unloadable storage file as backup");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not back up storage file, writes disabled");
            false
        }
    }
}

impl FileStore {
    /// Open the store at `path`.
    /// An unreadable or malformed file is moved to `<path>.bak` and the store starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let (entries, read_only) = match read_file(&path) {
            Ok(content) if content.trim().is_empty() => (BTreeMap::new(), false),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => (entries, false),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "storage file is malformed, starting empty");
                    (BTreeMap::new(), !set_aside(&path))
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage file is unreadable, starting empty");
                (BTreeMap::new(), !set_aside(&path))
            }
        };

        Self {
            path,
            entries,
            read_only,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        if self.read_only {
            bail!("{} could not be loaded, refusing to overwrite it", self.path.display());
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, &json)?;
        debug!(key, "storage key written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("totalFocusTime", "42").unwrap();
        assert_eq!(store.get("totalFocusTime").as_deref(), Some("42"));

        store.set("totalFocusTime", "43").unwrap();
        assert_eq!(store.get("totalFocusTime").as_deref(), Some("43"));
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = FileStore::open(&path);
        store.set("completedTasks", "7").unwrap();
        store.set("dailyStats", "{}").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("completedTasks").as_deref(), Some("7"));
        assert_eq!(reopened.get("dailyStats").as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::open(temp_dir.path().join("nope.json"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_file_store_malformed_file_is_backed_up() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, r#"{"totalFocusTime": "90", oops"#).unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("totalFocusTime"), None);

        let backup = temp_dir.path().join("storage.json.bak");
        assert_eq!(backup_path(&path), backup);
        assert_eq!(
            std::fs::read_to_string(&backup).unwrap(),
            r#"{"totalFocusTime": "90", oops"#
        );

        // New writes start a fresh file; the backup is left alone
        store.set("completedTasks", "1").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("completedTasks").as_deref(), Some("1"));
        assert_eq!(
            std::fs::read_to_string(&backup).unwrap(),
            r#"{"totalFocusTime": "90", oops"#
        );
    }

    #[test]
    fn test_file_store_read_only_keeps_values_in_memory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        let mut store = FileStore {
            path: path.clone(),
            entries: BTreeMap::new(),
            read_only: true,
        };

        assert!(store.set("completedTasks", "2").is_err());
        assert_eq!(store.get("completedTasks").as_deref(), Some("2"));
        assert!(!path.exists());
    }
}
