//! Exchange rate tables and the provider abstraction that fetches them

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base currency assumed when the upstream payload omits one.
pub const FALLBACK_BASE: &str = "EUR";

/// Rate table as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

/// An immutable rate table together with the moment it was obtained.
///
/// Every rate is the amount of that currency equal to one unit of `base`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    pub base: String,
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn from_response(resp: RatesResponse, fetched_at: DateTime<Utc>) -> Self {
        let base = if resp.base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            resp.base
        };
        Self {
            base,
            date: resp.date,
            rates: resp.rates,
            fetched_at,
        }
    }

    /// Returns true once the snapshot is strictly older than `ttl`.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        is_stale(self, now, ttl)
    }
}

pub fn is_stale(snapshot: &RateSnapshot, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
    now.signed_duration_since(snapshot.fetched_at) > ttl
}

/// Persisted form of the last successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSnapshot {
    pub resp: RatesResponse,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl CachedSnapshot {
    pub fn new(resp: RatesResponse, timestamp: DateTime<Utc>) -> Self {
        Self { resp, timestamp }
    }

    pub fn into_snapshot(self) -> RateSnapshot {
        RateSnapshot::from_response(self.resp, self.timestamp)
    }
}

#[async_trait]
pub trait RatesProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RatesResponse>;
}
