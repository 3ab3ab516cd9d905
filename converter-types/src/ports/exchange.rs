//! Exchange rate resolver port.
//!
//! This trait defines the interface for exchange rate lookups.
//! Implementations can be HTTP clients, fixed tables, mocks, etc.

use crate::domain::{CurrencyCode, CurrencyPair};

/// Why a rate could not be obtained. All variants are the same failure kind to callers.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Rate service returned HTTP {0}")]
    Status(u16),

    #[error("Rate request failed: {0}")]
    Transport(String),

    #[error("Malformed rate response: {0}")]
    MalformedBody(String),

    #[error("Rate for {0} missing from response")]
    MissingRate(CurrencyCode),
}

/// Port trait for exchange rate lookups.
#[async_trait::async_trait]
pub trait RateResolver: Send + Sync + 'static {
    /// Returns how many units of `pair.target` one unit of `pair.base` buys.
    ///
    /// Each call is independent: no caching and no retry.
    async fn resolve(&self, pair: &CurrencyPair) -> Result<f64, FetchError>;
}
