//! Configuration loading from environment.

use std::env;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub rates_api_url: String,
    pub rates_access_key: Option<String>,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let rates_api_url = lookup("RATES_API_URL")
            .unwrap_or_else(|| exchange_rates::DEFAULT_ENDPOINT.to_string());

        let rates_access_key = lookup("RATES_ACCESS_KEY").filter(|k| !k.trim().is_empty());

        let log_json = lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            port,
            rates_api_url,
            rates_access_key,
            log_json,
        })
    }
}
