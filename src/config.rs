//! Environment-driven client settings.

use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use std::time::Duration;

/// Connection settings for [`CryptoClient`](crate::client::CryptoClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// GET retries on top of the first attempt; `0` keeps single-attempt behavior.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    /// Read `CRYPTODASH_API_URL`, `CRYPTODASH_TIMEOUT_SECS` and
    /// `CRYPTODASH_MAX_RETRIES`. Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("CRYPTODASH_API_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            timeout: lookup("CRYPTODASH_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: lookup("CRYPTODASH_MAX_RETRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_retries),
        }
    }
}
