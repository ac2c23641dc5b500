//! Key-value storage trait for the persistence core

use crate::error::Result;

/// Namespaced key-value storage.
///
/// This trait abstracts the browser-local-storage analogue the stores
/// persist into: string keys, string values, synchronous write-through.
/// Implementations must be usable behind a shared handle so the session
/// and playlist stores can write to the same backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`; removing an absent key is not
    /// an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and JSON-decode the record stored under `key`
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// JSON-encode `value` and store it under `key`
    fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

/// Blanket forwarding so `Arc<dyn KeyValueStore>` and friends satisfy the
/// trait bound without re-wrapping
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
