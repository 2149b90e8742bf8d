//! Key-value blob backends

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use super::StorageError;

/// Opaque string blobs addressed by key, in the manner of browser local storage.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> { Ok(self.entries.get(key).cloned()) }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens `root`, creating it when missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io { path: root.clone(), source })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid { return Err(StorageError::InvalidKey(key.to_string())); }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Writes through a sibling temp file and renames it over the target.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| StorageError::Io { path: tmp.clone(), source })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }
}

/// Backend selected at runtime from configuration.
#[derive(Clone, Debug)]
pub enum Backend {
    Memory(MemoryBackend),
    File(FileBackend),
}

impl KeyValueBackend for Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(b) => b.get(key),
            Self::File(b) => b.get(key),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        match self {
            Self::Memory(b) => b.set(key, value),
            Self::File(b) => b.set(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend() {
        let mut b = MemoryBackend::new();
        assert_eq!(b.get("k").unwrap(), None);
        b.set("k", "v".into()).unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_backend_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::open(dir.path().join("data")).unwrap();
        assert_eq!(b.get("ecommerce_cart").unwrap(), None);
        b.set("ecommerce_cart", "[]".into()).unwrap();
        let reopened = FileBackend::open(b.root()).unwrap();
        assert_eq!(reopened.get("ecommerce_cart").unwrap().as_deref(), Some("[]"));
        assert!(!b.root().join("ecommerce_cart.json.tmp").exists());
    }

    #[test]
    fn test_file_backend_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::open(dir.path()).unwrap();
        assert!(matches!(b.set("../escape", "x".into()), Err(StorageError::InvalidKey(_))));
    }
}
