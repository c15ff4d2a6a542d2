//! Low-level HTTP client — `CryptoHttp`.
//!
//! One method per API endpoint. Decodes JSON straight into the domain record
//! types; the client performs no field validation of its own. Internal to the
//! SDK — `CryptoClient` wraps this.

use crate::domain::analytics::{AverageStat, RangeStat, TrendStat, VolatilityStat};
use crate::domain::mover::TopMover;
use crate::domain::prediction::Prediction;
use crate::domain::price::PricePoint;
use crate::domain::subscription::{SubscriptionReceipt, SubscriptionRequest};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::http::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::shared::serde_util::NullableList;
use crate::shared::{to_iso8601, TimeWindow};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the dashboard REST API.
#[derive(Clone)]
pub struct CryptoHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl CryptoHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            retry: RetryPolicy::None,
        }
    }

    /// Set the retry policy applied to GET endpoints. POSTs are never retried.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_latest_price(&self, coin_id: &str) -> Result<PricePoint, HttpError> {
        let url = format!("{}/latest/{}", self.base_url, urlencoding::encode(coin_id));
        self.get(&url).await
    }

    pub async fn get_price_history(
        &self,
        coin_id: &str,
        minutes: u32,
    ) -> Result<Vec<PricePoint>, HttpError> {
        let url = format!(
            "{}/history/{}?minutes={}",
            self.base_url,
            urlencoding::encode(coin_id),
            minutes
        );
        self.get_list(&url).await
    }

    pub async fn get_price_at(
        &self,
        coin_id: &str,
        timestamp: &DateTime<Utc>,
    ) -> Result<PricePoint, HttpError> {
        let url = format!(
            "{}/at/{}?timestamp={}",
            self.base_url,
            urlencoding::encode(coin_id),
            urlencoding::encode(&to_iso8601(timestamp))
        );
        self.get(&url).await
    }

    // ── Aggregates ───────────────────────────────────────────────────────

    pub async fn get_average(
        &self,
        coin_id: &str,
        window: &TimeWindow,
    ) -> Result<AverageStat, HttpError> {
        let url = self.windowed_url("average", coin_id, window);
        self.get(&url).await
    }

    pub async fn get_range(
        &self,
        coin_id: &str,
        window: &TimeWindow,
    ) -> Result<RangeStat, HttpError> {
        let url = self.windowed_url("range", coin_id, window);
        self.get(&url).await
    }

    pub async fn get_volatility(
        &self,
        coin_id: &str,
        window: &TimeWindow,
    ) -> Result<VolatilityStat, HttpError> {
        let url = self.windowed_url("volatility", coin_id, window);
        self.get(&url).await
    }

    pub async fn get_trend(
        &self,
        coin_id: &str,
        window: &TimeWindow,
    ) -> Result<TrendStat, HttpError> {
        let url = self.windowed_url("trend", coin_id, window);
        self.get(&url).await
    }

    // ── Movers & coins ───────────────────────────────────────────────────

    pub async fn get_top_movers(&self, minutes: u32) -> Result<Vec<TopMover>, HttpError> {
        let url = format!("{}/top-movers?minutes={}", self.base_url, minutes);
        self.get_list(&url).await
    }

    pub async fn get_available_coins(&self) -> Result<Vec<String>, HttpError> {
        let url = format!("{}/coins", self.base_url);
        self.get_list(&url).await
    }

    // ── Prediction ───────────────────────────────────────────────────────

    pub async fn get_prediction(
        &self,
        coin_id: &str,
        horizon_minutes: u32,
        lookback_minutes: Option<u32>,
    ) -> Result<Prediction, HttpError> {
        let mut url = format!(
            "{}/predict/{}?horizon_minutes={}",
            self.base_url,
            urlencoding::encode(coin_id),
            horizon_minutes
        );
        if let Some(l) = lookback_minutes {
            url = format!("{}&lookback_minutes={}", url, l);
        }
        self.get(&url).await
    }

    // ── Natural-language query ───────────────────────────────────────────

    pub async fn ask(&self, question: &str) -> Result<Vec<PricePoint>, HttpError> {
        let url = format!("{}/ask", self.base_url);
        let body = RequestBody::Text(question.to_string());
        let rows: NullableList<PricePoint> = self.send(Method::Post, &url, Some(body)).await?;
        Ok(rows.into_inner())
    }

    // ── Subscriptions ────────────────────────────────────────────────────

    pub async fn subscribe(&self, email: &str) -> Result<SubscriptionReceipt, HttpError> {
        let url = format!("{}/subscribe", self.base_url);
        self.post(&url, &SubscriptionRequest { email }).await
    }

    pub async fn unsubscribe(&self, email: &str) -> Result<SubscriptionReceipt, HttpError> {
        let url = format!("{}/unsubscribe", self.base_url);
        self.post(&url, &SubscriptionRequest { email }).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn windowed_url(&self, endpoint: &str, coin_id: &str, window: &TimeWindow) -> String {
        format!(
            "{}/{}/{}?start={}&end={}",
            self.base_url,
            endpoint,
            urlencoding::encode(coin_id),
            urlencoding::encode(&window.start_iso()),
            urlencoding::encode(&window.end_iso())
        )
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        match self.retry.config() {
            None => self.send(Method::Get, url, None).await,
            Some(config) => self.get_with_retry(url, &config).await,
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, HttpError> {
        let list: NullableList<T> = self.get(url).await?;
        Ok(list.into_inner())
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let body = RequestBody::Json(serde_json::to_value(body)?);
        self.send(Method::Post, url, Some(body)).await
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &RetryConfig,
    ) -> Result<T, HttpError> {
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.send::<T>(Method::Get, url, None).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout | HttpError::Io(_) => true,
                        #[cfg(feature = "http")]
                        HttpError::Transport(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// One attempt: send, map status, decode.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "Sending request");

        let request = HttpRequest {
            method,
            url: url.to_string(),
            body,
        };
        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, url, error = %e, "Request failed");
            e
        })?;

        if resp.is_success() {
            return Ok(serde_json::from_str::<T>(&resp.body)?);
        }

        tracing::warn!(%method, url, status = resp.status, "Non-success response");
        Err(status_error(resp))
    }
}

fn status_error(resp: HttpResponse) -> HttpError {
    let body_text = resp.body.trim().to_string();
    match resp.status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body_text),
        429 => HttpError::RateLimited {
            retry_after_ms: None,
        },
        400..=499 => HttpError::BadRequest(body_text),
        status => HttpError::ServerError {
            status,
            body: body_text,
        },
    }
}
