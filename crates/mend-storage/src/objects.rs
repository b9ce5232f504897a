use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::StorageError;

const TMP_SUFFIX: &str = ".tmp";

/// A generic key-value document store.
///
/// Keys are `/`-separated relative paths (e.g. `patients/ana_20250301T090000.json`).
pub trait DocumentStore: Send + Sync {
    /// Get a document body. `StorageError::NotFound` if the key is absent.
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Create or replace a document.
    fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError>;

    /// Delete a document. `StorageError::NotFound` if the key is absent.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All keys under `prefix`, in lexicographic order.
    fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Delete all documents under a prefix. Returns the number deleted.
pub fn delete_by_prefix<S: DocumentStore + ?Sized>(
    store: &S,
    prefix: &str,
) -> Result<usize, StorageError> {
    let keys = store.list(prefix)?;
    for key in &keys {
        store.delete(key)?;
    }
    Ok(keys.len())
}

/// Process-local store, mostly for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let objects = self.objects.read().map_err(|_| StorageError::Poisoned)?;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut objects = self.objects.write().map_err(|_| StorageError::Poisoned)?;
        objects.insert(key.to_string(), body);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut objects = self.objects.write().map_err(|_| StorageError::Poisoned)?;
        objects
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let objects = self.objects.read().map_err(|_| StorageError::Poisoned)?;
        Ok(objects
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }
}

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(key.split('/').fold(self.root.clone(), |p, seg| p.join(seg)))
    }
}

impl DocumentStore for FsStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound {
                key: key.to_string(),
            },
            _ => StorageError::io(&path, e),
        })
    }

    fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        // Write to a sibling temp file then rename so readers never see a partial document.
        let mut tmp = path.clone().into_os_string();
        tmp.push(TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, &body).map_err(|e| StorageError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;

        tracing::debug!(key, bytes = body.len(), "document written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound {
                key: key.to_string(),
            },
            _ => StorageError::io(&path, e),
        })
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        if self.root.exists() {
            collect_keys(&self.root, "", &mut keys)?;
        }
        keys.retain(|k| k.starts_with(prefix));
        keys.sort();
        Ok(keys)
    }
}

fn collect_keys(dir: &Path, prefix: &str, keys: &mut Vec<String>) -> Result<(), StorageError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StorageError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(|e| StorageError::io(entry.path(), e))?;

        if file_type.is_dir() {
            collect_keys(&entry.path(), &format!("{prefix}{name}/"), keys)?;
        } else if !name.ends_with(TMP_SUFFIX) {
            keys.push(format!("{prefix}{name}"));
        }
    }
    Ok(())
}

/// Reject keys that would escape the store root or collide with temp files.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.ends_with(TMP_SUFFIX)
        || key.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");

    if bad {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}
