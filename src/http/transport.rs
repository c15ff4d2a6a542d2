//! Transport seam — one HTTP exchange, no status interpretation.
//!
//! `CryptoHttp` builds requests and maps statuses; a `Transport` only moves
//! bytes. Production uses [`ReqwestTransport`]; tests plug in a recorder.

use crate::error::HttpError;

use async_trait::async_trait;
#[cfg(feature = "http")]
use std::time::Duration;

/// HTTP verb used by the dashboard API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    /// Sent as `text/plain` (the `/ask` endpoint reads the raw body).
    Text(String),
}

/// A fully-built request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<RequestBody>,
}

/// Raw response: status and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// errors; only transport-level failures are returned as `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// `reqwest`-backed transport.
#[cfg(feature = "http")]
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut req = self.client.request(method, &request.url);

        match request.body {
            Some(RequestBody::Json(value)) => req = req.json(&value),
            Some(RequestBody::Text(text)) => {
                req = req
                    .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
                    .body(text)
            }
            None => {}
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e)
            }
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        assert!(ok.is_success());
        let redirect = HttpResponse {
            status: 302,
            body: String::new(),
        };
        assert!(!redirect.is_success());
        let missing = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!missing.is_success());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
