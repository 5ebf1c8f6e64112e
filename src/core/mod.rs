//! Core business logic: rate snapshots, caching policy and conversion

pub mod config;
pub mod converter;
pub mod log;
pub mod metadata;
pub mod rate_store;
pub mod rates;
pub mod state;
pub mod storage;

// Re-export main types for cleaner imports
pub use converter::{Conversion, ConversionError, ConversionResult, convert, cross_rate, parse_amount};
pub use rate_store::{RateStore, RateStoreError, SnapshotOutcome};
pub use rates::{CachedSnapshot, RateSnapshot, RatesProvider, RatesResponse};
pub use state::UiState;
pub use storage::KeyValueStorage;
