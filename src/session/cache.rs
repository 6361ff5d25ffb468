//! Local key-value caches
//!
//! The session store only needs string get/set/remove under a fixed key.
//! [`MemoryCache`] is always available; [`FileCache`] (feature `native`)
//! keeps one file per key so a session survives process restarts. The
//! browser build supplies its own `localStorage` implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::error::{SessionError, SessionResult};

/// Minimal string key-value store
pub trait KeyValueCache {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;
    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> SessionResult<()>;
}

impl<C: KeyValueCache + ?Sized> KeyValueCache for &C {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

/// In-process cache. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> SessionError {
    SessionError::Cache("memory cache lock poisoned".to_string())
}

impl KeyValueCache for MemoryCache {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileCache;

#[cfg(feature = "native")]
mod file {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::KeyValueCache;
    use crate::session::error::{SessionError, SessionResult};

    /// Directory-backed cache, one `<key>.json` file per entry
    #[derive(Debug, Clone)]
    pub struct FileCache {
        dir: PathBuf,
    }

    impl FileCache {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn entry_path(&self, key: &str) -> SessionResult<PathBuf> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if !valid {
                return Err(SessionError::Cache(format!("invalid cache key: {:?}", key)));
            }
            Ok(self.dir.join(format!("{}.json", key)))
        }
    }

    impl KeyValueCache for FileCache {
        fn get(&self, key: &str) -> SessionResult<Option<String>> {
            let path = self.entry_path(key)?;
            match std::fs::read_to_string(&path) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> SessionResult<()> {
            let path = self.entry_path(key)?;
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(path, value)?;
            Ok(())
        }

        fn remove(&self, key: &str) -> SessionResult<()> {
            let path = self.entry_path(key)?;
            match std::fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_clones_share_entries() {
        let cache = MemoryCache::new();
        let other = cache.clone();

        cache.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert!(cache.is_empty());
        // Removing twice is fine
        cache.remove("k").unwrap();
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_cache_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        FileCache::new(dir.path()).set("dashboardUser", "{}").unwrap();
        let reopened = FileCache::new(dir.path());
        assert_eq!(reopened.get("dashboardUser").unwrap().as_deref(), Some("{}"));

        reopened.remove("dashboardUser").unwrap();
        assert!(reopened.get("dashboardUser").unwrap().is_none());
        reopened.remove("dashboardUser").unwrap();
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_cache_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let cache = FileCache::new(&nested);
        assert!(cache.get("key").unwrap().is_none());
        cache.set("key", "value").unwrap();
        assert!(nested.join("key.json").exists());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_cache_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        assert!(matches!(cache.set("../escape", "x"), Err(SessionError::Cache(_))));
        assert!(matches!(cache.get(""), Err(SessionError::Cache(_))));
    }
}
