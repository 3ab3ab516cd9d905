//! Exchange Rate Resolvers
//!
//! Adapters for the [`RateResolver`] port:
//! - [`HttpRateResolver`] asks a live rate service (exchangerate.host compatible) for one
//!   rate per call.
//! - [`FixedRates`] answers from an in-memory table, for development and testing.
//!
//! # Example
//! ```no_run
//! use converter_types::{CurrencyPair, RateResolver};
//! use exchange_rates::HttpRateResolver;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = HttpRateResolver::default();
//! let pair = CurrencyPair::parse("USD to PKR").expect("valid pair");
//! let rate = resolver.resolve(&pair).await?;
//! println!("1 USD = {rate} PKR");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use converter_types::{CurrencyCode, CurrencyPair, FetchError, RateResolver};
use reqwest::Client;
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Live HTTP Resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Default rate lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate.host/latest";

/// Resolves rates with a single `GET <endpoint>?base=<BASE>&symbols=<TARGET>` per call.
///
/// No caching, no retry, and no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct HttpRateResolver {
    endpoint: String,
    access_key: Option<String>,
    http: Client,
}

impl HttpRateResolver {
    /// Creates a resolver for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: None,
            http: Client::new(),
        }
    }

    /// Sends `access_key=<key>` with every request.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Uses a preconfigured HTTP client (proxy settings, TLS roots, ...).
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpRateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RateResolver for HttpRateResolver {
    #[tracing::instrument(skip(self, pair), fields(pair = %pair))]
    async fn resolve(&self, pair: &CurrencyPair) -> Result<f64, FetchError> {
        let mut query = vec![("base", pair.base.as_str()), ("symbols", pair.target.as_str())];
        if let Some(key) = &self.access_key {
            query.push(("access_key", key.as_str()));
        }

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Rate service rejected request");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let rate = parse_rate(&body, &pair.target)?;
        tracing::debug!(rate, "Resolved exchange rate");
        Ok(rate)
    }
}

/// Extracts `rates.<target>` from a rate service response body.
pub fn parse_rate(body: &str, target: &CurrencyCode) -> Result<f64, FetchError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;

    let rates = json
        .get("rates")
        .and_then(Value::as_object)
        .ok_or_else(|| FetchError::MalformedBody("missing `rates` object".into()))?;

    let raw = rates
        .get(target.as_str())
        .ok_or_else(|| FetchError::MissingRate(target.clone()))?;

    match raw.as_f64() {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err(FetchError::MalformedBody(format!(
            "rate for {} is not a positive number: {}",
            target, raw
        ))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed Table Resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Resolves rates from a fixed in-memory table. Unknown pairs fail like a missing key.
#[derive(Debug, Clone, Default)]
pub struct FixedRates {
    rates: HashMap<CurrencyPair, f64>,
}

impl FixedRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rate for one directed pair.
    pub fn with_rate(mut self, pair: CurrencyPair, rate: f64) -> Self {
        self.rates.insert(pair, rate);
        self
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[async_trait]
impl RateResolver for FixedRates {
    async fn resolve(&self, pair: &CurrencyPair) -> Result<f64, FetchError> {
        self.rates
            .get(pair)
            .copied()
            .ok_or_else(|| FetchError::MissingRate(pair.target.clone()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
