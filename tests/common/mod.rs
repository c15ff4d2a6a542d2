//! Recording mock transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cryptodash::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://mock.test";

enum Canned {
    Response(HttpResponse),
    TransportError(String),
}

/// Answers by request path (query string ignored) and records every request.
/// Unknown paths get a `404`.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on(&self, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            Canned::Response(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Canned::TransportError(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn path_of(url: &str) -> String {
    let rest = url.strip_prefix(BASE_URL).unwrap_or(url);
    rest.split('?').next().unwrap_or_default().to_string()
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let path = path_of(&request.url);
        self.requests.lock().unwrap().push(request);
        match self.routes.lock().unwrap().get(&path) {
            Some(Canned::Response(resp)) => Ok(resp.clone()),
            Some(Canned::TransportError(msg)) => Err(HttpError::Io(msg.clone())),
            None => Ok(HttpResponse {
                status: 404,
                body: "404 page not found\n".to_string(),
            }),
        }
    }
}

pub fn client_with(transport: Arc<MockTransport>) -> CryptoClient {
    CryptoClient::builder()
        .base_url(BASE_URL)
        .transport(transport)
        .build()
        .expect("client should build")
}

pub const LATEST_BTC: &str =
    r#"{"coin_id":"bitcoin","timestamp":"2024-01-15T12:05:00Z","price_usd":43250.5}"#;

pub const HISTORY_BTC: &str = r#"[
    {"coin_id":"bitcoin","timestamp":"2024-01-15T12:02:00Z","price_usd":43100.0},
    {"coin_id":"bitcoin","timestamp":"2024-01-15T12:00:00Z","price_usd":43000.0},
    {"coin_id":"bitcoin","timestamp":"2024-01-15T12:01:00Z","price_usd":43050.0}
]"#;

pub const TOP_MOVERS: &str = r#"[
    {"coin_id":"solana","start_price":98.1,"end_price":104.2,"percent_change":6.218},
    {"coin_id":"cardano","start_price":0.52,"end_price":0.49,"percent_change":-5.769}
]"#;

pub const TREND_BTC: &str = r#"{"coin_id":"bitcoin","slope":0.0213,"trend":"Uptrend","data_points":288,
    "start":"2024-01-14T12:00:00Z","end":"2024-01-15T12:00:00Z"}"#;

pub const VOLATILITY_BTC: &str = r#"{"coin_id":"bitcoin","stddev_price":212.4,"mean_price":43010.0,
    "data_points":288,"start":"2024-01-14T12:00:00Z","end":"2024-01-15T12:00:00Z"}"#;

pub const PREDICTION_BTC: &str = r#"{"coin_id":"bitcoin","horizon_minutes":60,"predicted_price":43510.22,
    "price_low":42900.0,"price_high":44120.44,"trend":"Uptrend","slope":0.00003,"data_points":1440,
    "predicted_at":"2024-01-15T12:00:00Z","horizon_end_time":"2024-01-15T13:00:00Z"}"#;
