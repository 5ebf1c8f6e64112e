//! Key-value persistence abstraction

use anyhow::Result;

/// Synchronous string key-value storage backing the rate cache and UI state.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
