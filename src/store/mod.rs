pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::storage::KeyValueStorage;
use disk::DiskStorage;
use memory::MemoryStorage;
use std::sync::Arc;
use tracing::warn;

/// Opens the persistent storage under the configured data directory.
///
/// Falls back to in-memory storage when the directory cannot be opened, so
/// the converter keeps working without an offline cache.
pub fn open_storage(config: &AppConfig) -> Arc<dyn KeyValueStorage> {
    let opened = config
        .default_data_path()
        .and_then(|path| DiskStorage::open(&path.join("cache")));

    match opened {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!(error = %e, "Persistent storage unavailable, using memory storage");
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_storage_persists_under_data_path() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().into_owned()),
            ..AppConfig::default()
        };

        {
            let storage = open_storage(&config);
            storage.set("key", "value").unwrap();
        }
        assert!(dir.path().join("cache").exists());

        let storage = open_storage(&config);
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));
    }
}
