//! Endpoint-level tests against a recording mock transport.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use cryptodash::domain::analytics::time_range_presets_at;
use cryptodash::prelude::*;

#[tokio::test]
async fn test_latest_decodes_body_unmodified() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 200, LATEST_BTC);
    let client = client_with(mock.clone());

    let latest = client.prices().latest("bitcoin").await.unwrap();
    assert_eq!(latest.coin_id.as_str(), "bitcoin");
    assert_eq!(latest.price_usd, 43250.5);
    assert_eq!(
        latest.timestamp,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 5, 0).unwrap()
    );
    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/latest/bitcoin")]);
}

#[tokio::test]
async fn test_history_keeps_server_order_and_sends_minutes() {
    let mock = MockTransport::new();
    mock.on("/history/bitcoin", 200, HISTORY_BTC);
    let client = client_with(mock.clone());

    let history = client.prices().history("bitcoin", 240).await.unwrap();
    let prices: Vec<f64> = history.iter().map(|p| p.price_usd).collect();
    assert_eq!(prices, vec![43100.0, 43000.0, 43050.0]);
    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/history/bitcoin?minutes=240")]);
}

#[tokio::test]
async fn test_null_list_decodes_as_empty() {
    let mock = MockTransport::new();
    mock.on("/history/bitcoin", 200, "null");
    mock.on("/top-movers", 200, "null");
    mock.on("/coins", 200, "null");
    let client = client_with(mock);

    assert!(client.prices().history("bitcoin", 60).await.unwrap().is_empty());
    assert!(client.movers().top(60).await.unwrap().is_empty());
    assert!(client.coins().available().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_success_is_error_with_message() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 404, "Price data not found\n");
    mock.on("/trend/bitcoin", 500, "Query error");
    mock.on("/range/bitcoin", 400, "Invalid start time");
    let client = client_with(mock);
    let window = time_range_presets_at(Utc::now())[0].window;

    let err = client.prices().latest("bitcoin").await.unwrap_err();
    assert!(!err.to_string().is_empty());
    assert_eq!(err.server_message().as_deref(), Some("Price data not found"));

    let err = client.analytics().trend("bitcoin", &window).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 500, .. })
    ));

    let err = client.analytics().range("bitcoin", &window).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::BadRequest(_))));
}

#[tokio::test]
async fn test_transport_failure_is_error() {
    let mock = MockTransport::new();
    mock.fail("/coins", "connection refused");
    let client = client_with(mock);

    let err = client.coins().available().await.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 200, "<html>gateway</html>");
    let client = client_with(mock);

    let err = client.prices().latest("bitcoin").await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Decode(_))));
}

#[tokio::test]
async fn test_window_endpoints_encode_iso_timestamps() {
    let mock = MockTransport::new();
    let client = client_with(mock.clone());
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let window = time_range_presets_at(now)[0].window;

    let _ = client.analytics().average("bitcoin", &window).await;
    let _ = client.analytics().volatility("bitcoin", &window).await;

    assert_eq!(
        mock.urls(),
        vec![
            format!(
                "{BASE_URL}/average/bitcoin?start=2024-01-15T11%3A00%3A00.000Z&end=2024-01-15T12%3A00%3A00.000Z"
            ),
            format!(
                "{BASE_URL}/volatility/bitcoin?start=2024-01-15T11%3A00%3A00.000Z&end=2024-01-15T12%3A00%3A00.000Z"
            ),
        ]
    );
}

#[tokio::test]
async fn test_price_at_and_path_encoding() {
    let mock = MockTransport::new();
    let client = client_with(mock.clone());
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

    let _ = client.prices().at("usd coin", &at).await;
    assert_eq!(
        mock.urls(),
        vec![format!(
            "{BASE_URL}/at/usd%20coin?timestamp=2024-01-15T12%3A00%3A00.000Z"
        )]
    );
}

#[tokio::test]
async fn test_prediction_query() {
    let mock = MockTransport::new();
    mock.on("/predict/bitcoin", 200, PREDICTION_BTC);
    let client = client_with(mock.clone());

    let p = client.predictions().predict("bitcoin", 60, None).await.unwrap();
    assert_eq!(p.predicted_price, 43510.22);
    let _ = client.predictions().predict("bitcoin", 360, Some(2880)).await;

    assert_eq!(
        mock.urls(),
        vec![
            format!("{BASE_URL}/predict/bitcoin?horizon_minutes=60"),
            format!("{BASE_URL}/predict/bitcoin?horizon_minutes=360&lookback_minutes=2880"),
        ]
    );
}

#[tokio::test]
async fn test_ask_sends_raw_text() {
    let mock = MockTransport::new();
    mock.on("/ask", 200, &format!("[{LATEST_BTC}]"));
    let client = client_with(mock.clone());

    let rows = client.ask().question("bitcoin price now").await.unwrap();
    assert_eq!(rows.len(), 1);

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].body,
        Some(RequestBody::Text("bitcoin price now".to_string()))
    );
}

#[tokio::test]
async fn test_ask_error_json_is_unwrapped() {
    let mock = MockTransport::new();
    mock.on("/ask", 500, r#"{"error":"AI query generation failed"}"#);
    let client = client_with(mock);

    let err = client.ask().question("???").await.unwrap_err();
    assert_eq!(
        err.server_message().as_deref(),
        Some("AI query generation failed")
    );
}

#[tokio::test]
async fn test_subscribe_posts_json() {
    let mock = MockTransport::new();
    mock.on("/subscribe", 200, r#"{"message":"Subscribed","email":"a@b.co"}"#);
    let client = client_with(mock.clone());

    let receipt = client.subscriptions().subscribe(" a@b.co ").await.unwrap();
    assert_eq!(receipt.message.as_deref(), Some("Subscribed"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{BASE_URL}/subscribe"));
    assert_eq!(
        requests[0].body,
        Some(RequestBody::Json(serde_json::json!({"email": "a@b.co"})))
    );
}

#[tokio::test]
async fn test_invalid_email_makes_no_request() {
    let mock = MockTransport::new();
    let client = client_with(mock.clone());

    for bad in ["", "a@b", "a b@c.com"] {
        let err = client.subscriptions().subscribe(bad).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn test_default_policy_is_single_attempt() {
    let mock = MockTransport::new();
    mock.on("/coins", 503, "unavailable");
    let client = client_with(mock.clone());

    assert!(client.coins().available().await.is_err());
    assert_eq!(mock.count(), 1);
}

#[tokio::test]
async fn test_retry_policy_applies_to_gets_only() {
    let mock = MockTransport::new();
    mock.on("/coins", 503, "unavailable");
    mock.on("/unsubscribe", 503, "unavailable");
    let config = RetryConfig {
        max_retries: 2,
        initial_delay: std::time::Duration::from_millis(1),
        jitter: false,
        ..RetryConfig::idempotent()
    };
    let client = CryptoClient::builder()
        .base_url(BASE_URL)
        .transport(mock.clone())
        .retry_policy(RetryPolicy::Custom(config))
        .build()
        .unwrap();

    let err = client.coins().available().await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 503, .. })
    ));
    assert_eq!(mock.count(), 3);

    let _ = client.subscriptions().unsubscribe("a@b.co").await;
    assert_eq!(mock.count(), 4);
}
