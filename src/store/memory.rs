use crate::core::storage::KeyValueStorage;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// In-memory storage, used for tests and when no data directory is usable.
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .inner
            .lock()
            .map_err(|_| anyhow!("Memory storage lock poisoned"))?;
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Storage HIT for key: {}", key);
        } else {
            debug!("Storage MISS for key: {}", key);
        }
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| anyhow!("Memory storage lock poisoned"))?;
        debug!("Storage PUT for key: {}", key);
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() -> Result<()> {
        let storage = MemoryStorage::new();

        // Initially, storage is empty
        assert!(storage.get("key1")?.is_none());

        storage.set("key1", "value1")?;
        assert_eq!(storage.get("key1")?.as_deref(), Some("value1"));

        // Overwrite replaces the previous value
        storage.set("key1", "value2")?;
        assert_eq!(storage.get("key1")?.as_deref(), Some("value2"));

        assert!(storage.get("key2")?.is_none());
        Ok(())
    }
}
