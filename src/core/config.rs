use crate::core::rate_store::DEFAULT_CACHE_TTL_MS;
use crate::core::state::UiState;
use anyhow::{Context, Result};
use chrono::TimeDelta;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://api.vatcomply.com";

const API_BASE_ENV: &str = "FXCONV_API_BASE";
const CACHE_TTL_ENV: &str = "FXCONV_CACHE_TTL_MS";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

fn default_cache_ttl_ms() -> u64 {
    DEFAULT_CACHE_TTL_MS
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    pub data_path: Option<String>,
    #[serde(default)]
    pub defaults: UiState,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            data_path: None,
            defaults: UiState::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("io", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(API_BASE_ENV).ok(),
            std::env::var(CACHE_TTL_ENV).ok(),
        )
    }

    fn with_overrides(mut self, api_base: Option<String>, cache_ttl_ms: Option<String>) -> Self {
        if let Some(base_url) = api_base.filter(|s| !s.trim().is_empty()) {
            debug!("Overriding API base with {}", base_url);
            self.provider.base_url = base_url;
        }
        if let Some(raw) = cache_ttl_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.cache_ttl_ms = ms,
                Err(e) => warn!("Ignoring invalid {}={}: {}", CACHE_TTL_ENV, raw, e),
            }
        }
        self
    }

    pub fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::try_from(self.cache_ttl_ms).unwrap_or(i64::MAX / 1_000))
    }
}
