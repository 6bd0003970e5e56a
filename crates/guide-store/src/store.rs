//! String-keyed JSON document store.
//!
//! Each key maps to `<root>/<key>.json`. The documents are tiny (a few
//! hundred bytes), so reads and writes are synchronous on the caller's
//! thread.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A local key-value store holding one JSON document per key.
///
/// Cloning is cheap; clones share the same root directory, which is how the
/// preferences and progress singletons each get a handle to the same store.
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open the store at the default per-user location.
    ///
    /// Falls back to the current directory when no home directory can be
    /// resolved.
    pub fn open_default() -> Self {
        let root = directories::ProjectDirs::from("com", "GuideStudio", "Guide Studio")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }

    /// Open a store rooted at a specific directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the document under `key`, falling back to `default` when the
    /// document is absent, unreadable, or fails to parse.
    pub fn read_or_else<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        std::fs::read_to_string(self.path_for(key))
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_else(default)
    }

    /// Write the document under `key`.
    ///
    /// Failures (directory creation, serialization, disk) are swallowed and
    /// logged; callers never observe them.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            tracing::warn!("failed to persist '{key}': {err}");
        }
    }

    fn try_write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(self.path_for(key), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    fn fallback() -> Doc {
        Doc {
            name: "default".to_string(),
            count: 0,
        }
    }

    #[test]
    fn missing_document_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KvStore::at(dir.path());
        assert_eq!(store.read_or_else("absent", fallback), fallback());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KvStore::at(dir.path());
        let doc = Doc {
            name: "guide".to_string(),
            count: 7,
        };
        store.write("doc", &doc);
        assert_eq!(store.read_or_else("doc", fallback), doc);
    }

    #[test]
    fn corrupt_document_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KvStore::at(dir.path());
        std::fs::write(dir.path().join("doc.json"), "{ not json").expect("write");
        assert_eq!(store.read_or_else("doc", fallback), fallback());
    }

    #[test]
    fn write_creates_missing_root_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KvStore::at(dir.path().join("nested").join("deeper"));
        let doc = fallback();
        store.write("doc", &doc);
        assert_eq!(store.read_or_else::<Doc, _>("doc", || panic!("should exist")), doc);
    }

    #[test]
    fn write_failure_is_swallowed() {
        // Root is a file, so create_dir_all fails; the call must not panic.
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").expect("write");
        let store = KvStore::at(&blocker);
        store.write("doc", &fallback());
    }
}
