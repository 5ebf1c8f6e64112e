//! Cached access to the latest exchange rate snapshot

use crate::core::rates::{CachedSnapshot, RateSnapshot, RatesProvider};
use crate::core::storage::KeyValueStorage;
use chrono::{TimeDelta, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const RATES_CACHE_KEY: &str = "rates_cache_v1";
pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000;

#[derive(Debug, Error)]
pub enum RateStoreError {
    #[error("Rates fetch failed: {0}")]
    Fetch(String),
    #[error("Failed to load rates: {0}")]
    CacheEmpty(String),
}

/// Snapshot handed back to the caller.
///
/// `degraded` is set when a live fetch failed and the snapshot came from the
/// cache instead.
#[derive(Debug, Clone)]
pub struct SnapshotOutcome {
    pub snapshot: RateSnapshot,
    pub degraded: bool,
}

pub struct RateStore {
    storage: Arc<dyn KeyValueStorage>,
    provider: Arc<dyn RatesProvider>,
    ttl: TimeDelta,
}

impl RateStore {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        provider: Arc<dyn RatesProvider>,
        ttl: TimeDelta,
    ) -> Self {
        Self {
            storage,
            provider,
            ttl,
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the freshest snapshot available.
    ///
    /// A fresh cached snapshot is returned without touching the network unless
    /// `force_refresh` is set. A failed fetch falls back once to the cache.
    #[instrument(name = "RateStoreGet", skip(self))]
    pub async fn get_snapshot(
        &self,
        force_refresh: bool,
    ) -> Result<SnapshotOutcome, RateStoreError> {
        if !force_refresh {
            if let Some(cached) = self.read_cached() {
                if !cached.is_stale(Utc::now(), self.ttl) {
                    debug!("Serving cached rates from {}", cached.fetched_at);
                    return Ok(SnapshotOutcome {
                        snapshot: cached,
                        degraded: false,
                    });
                }
                debug!("Cached rates from {} are stale", cached.fetched_at);
            }
        }

        match self.refresh().await {
            Ok(snapshot) => Ok(SnapshotOutcome {
                snapshot,
                degraded: false,
            }),
            Err(e) => match self.read_cached() {
                Some(cached) => {
                    warn!(error = %e, "Using cached rates due to fetch failure");
                    Ok(SnapshotOutcome {
                        snapshot: cached,
                        degraded: true,
                    })
                }
                None => Err(RateStoreError::CacheEmpty(e.to_string())),
            },
        }
    }

    /// Fetches a new snapshot and persists it, without any cache fallback.
    pub async fn refresh(&self) -> Result<RateSnapshot, RateStoreError> {
        let resp = self
            .provider
            .fetch_rates()
            .await
            .map_err(|e| RateStoreError::Fetch(format!("{e:#}")))?;

        let cached = CachedSnapshot::new(resp, Utc::now());
        match serde_json::to_string(&cached) {
            Ok(json) => {
                if let Err(e) = self.storage.set(RATES_CACHE_KEY, &json) {
                    warn!(error = %e, "Failed to persist rates cache");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize rates cache"),
        }

        Ok(cached.into_snapshot())
    }

    /// Reads the persisted snapshot; an unreadable entry counts as absent.
    pub fn read_cached(&self) -> Option<RateSnapshot> {
        let raw = match self.storage.get(RATES_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Rates cache MISS");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read rates cache");
                return None;
            }
        };

        match serde_json::from_str::<CachedSnapshot>(&raw) {
            Ok(cached) => {
                debug!("Rates cache HIT");
                Some(cached.into_snapshot())
            }
            Err(e) => {
                debug!("Discarding undecodable rates cache: {}", e);
                None
            }
        }
    }
}
