//! High-level client — `CryptoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::ClientConfig;
use crate::domain::analytics::client::Analytics;
use crate::domain::ask::client::Ask;
use crate::domain::coin::client::Coins;
use crate::domain::mover::client::Movers;
use crate::domain::prediction::client::Predictions;
use crate::domain::price::client::Prices;
use crate::domain::subscription::client::Subscriptions;
use crate::error::SdkError;
use crate::http::{CryptoHttp, RetryConfig, RetryPolicy, Transport};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::analytics::client::Analytics as AnalyticsClient;
pub use crate::domain::ask::client::Ask as AskClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::mover::client::Movers as MoversClient;
pub use crate::domain::prediction::client::Predictions as PredictionsClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::subscription::client::Subscriptions as SubscriptionsClient;

/// The primary entry point for the dashboard API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.prices()`, `client.analytics()`, etc. Cloning is cheap; clones
/// share the underlying transport.
#[derive(Clone)]
pub struct CryptoClient {
    pub(crate) http: CryptoHttp,
}

impl CryptoClient {
    pub fn builder() -> CryptoClientBuilder {
        CryptoClientBuilder::default()
    }

    /// Build a client from environment-derived settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        let mut builder = Self::builder()
            .base_url(&config.api_url)
            .timeout(config.timeout);
        if config.max_retries > 0 {
            builder = builder.retry_policy(RetryPolicy::Custom(RetryConfig::with_max_retries(
                config.max_retries,
            )));
        }
        builder.build()
    }

    /// Low-level HTTP client, one method per endpoint.
    pub fn http(&self) -> &CryptoHttp {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics { client: self }
    }

    pub fn movers(&self) -> Movers<'_> {
        Movers { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn predictions(&self) -> Predictions<'_> {
        Predictions { client: self }
    }

    pub fn ask(&self) -> Ask<'_> {
        Ask { client: self }
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptoClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for CryptoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            retry_policy: RetryPolicy::None,
            transport: None,
        }
    }
}

impl CryptoClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout for the default reqwest transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for GET endpoints. Defaults to a single attempt.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Replace the HTTP transport (the timeout setting is then ignored).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<CryptoClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".to_string()));
        }
        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout)?,
        };
        Ok(CryptoClient {
            http: CryptoHttp::new(&self.base_url, transport).with_retry(self.retry_policy),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}
