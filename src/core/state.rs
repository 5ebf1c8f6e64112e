//! Remembered converter inputs

use crate::core::storage::KeyValueStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const UI_STATE_KEY: &str = "cc_state_v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            from: "EUR".to_string(),
            to: "USD".to_string(),
            amount: "1".to_string(),
        }
    }
}

impl UiState {
    /// Loads the last saved state, or `defaults` if none can be read.
    pub fn load_or(storage: &dyn KeyValueStorage, defaults: &UiState) -> Self {
        match storage.get(UI_STATE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!("Discarding undecodable UI state: {}", e);
                defaults.clone()
            }),
            Ok(None) => defaults.clone(),
            Err(e) => {
                debug!("Failed to read UI state: {}", e);
                defaults.clone()
            }
        }
    }

    pub fn save(&self, storage: &dyn KeyValueStorage) -> Result<()> {
        let json = serde_json::to_string(self).context("Failed to serialize UI state")?;
        storage
            .set(UI_STATE_KEY, &json)
            .context("Failed to save UI state")
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}
