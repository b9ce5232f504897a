use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::DocumentStore;

/// Load and deserialize a JSON document.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: DocumentStore + ?Sized,
    T: DeserializeOwned,
{
    let body = store.get(key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Serialize and store a JSON document, replacing any existing one.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: DocumentStore + ?Sized,
    T: Serialize,
{
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body)
}
