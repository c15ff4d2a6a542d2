//! Page containers driven end-to-end through the mock transport.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use cryptodash::domain::analytics::time_range_presets_at;
use cryptodash::domain::ask::state::ASK_FAILED;
use cryptodash::prelude::*;
use cryptodash::view::analytics::{RANGE_FAILED, TREND_FAILED};
use cryptodash::view::dashboard::{HISTORY_FAILED, LATEST_FAILED};
use cryptodash::view::ml_insights::{PREDICTION_FAILED, SIGNALS_FAILED};
use cryptodash::view::subscribe::INVALID_EMAIL;

#[tokio::test]
async fn test_dashboard_refresh_populates_panels() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 200, LATEST_BTC);
    mock.on("/history/bitcoin", 200, HISTORY_BTC);
    let client = client_with(mock.clone());

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&client).await;

    assert!(dashboard.error().is_none());
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.price_card().price, "$43,250.50");
    assert_eq!(dashboard.stats_card().count, 3);

    let chart = dashboard.chart_card();
    let prices: Vec<f64> = chart.points().iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![43000.0, 43050.0, 43100.0]);
    assert_eq!(chart.color, "#f7931a");

    let mut urls = mock.urls();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/history/bitcoin?minutes=60"),
            format!("{BASE_URL}/latest/bitcoin"),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_history_failure() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 200, LATEST_BTC);
    mock.on("/history/bitcoin", 500, "Query error");
    let client = client_with(mock);

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&client).await;

    assert_eq!(dashboard.error(), Some(HISTORY_FAILED));
    assert!(dashboard.latest().is_some());
    assert_eq!(dashboard.stats_card().high, "N/A");
}

#[tokio::test]
async fn test_dashboard_latest_failure_is_visible_when_history_succeeds() {
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 500, "Query error");
    mock.on("/history/bitcoin", 200, HISTORY_BTC);
    let client = client_with(mock);

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&client).await;

    assert_eq!(dashboard.error(), Some(LATEST_FAILED));
    assert_eq!(dashboard.price_card().price, "Loading...");
    assert_eq!(dashboard.stats_card().count, 3);

    // A fully successful pair clears it.
    let mock = MockTransport::new();
    mock.on("/latest/bitcoin", 200, LATEST_BTC);
    mock.on("/history/bitcoin", 200, HISTORY_BTC);
    dashboard.refresh(&client_with(mock)).await;
    assert!(dashboard.error().is_none());
}

#[tokio::test]
async fn test_opening_coin_manager_fetches_coin_list() {
    let mock = MockTransport::new();
    mock.on("/coins", 200, r#"["bitcoin","ethereum","solana"]"#);
    let client = client_with(mock.clone());

    let mut dashboard = Dashboard::new();
    dashboard.toggle_and_load_coin_manager(&client).await;

    assert!(dashboard.coin_manager_open());
    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/coins")]);
    assert_eq!(dashboard.coin_manager().count_label(), "Total: 3 coins available");

    dashboard.toggle_and_load_coin_manager(&client).await;
    assert!(!dashboard.coin_manager_open());
    assert_eq!(mock.count(), 1);
}

#[tokio::test]
async fn test_shell_refresh_reloads_open_coin_manager() {
    let mock = MockTransport::new();
    mock.on("/coins", 200, r#"["bitcoin","dogecoin"]"#);
    let client = client_with(mock.clone());

    let mut shell = Shell::new();
    shell.navigate("/analytics");
    assert!(shell.analytics.toggle_coin_manager().is_some());
    shell.refresh_active(&client).await;

    assert!(mock.urls().contains(&format!("{BASE_URL}/coins")));
    assert_eq!(shell.analytics.coin_manager().display_ids(), vec!["BITCOIN", "DOGECOIN"]);
}

#[tokio::test]
async fn test_dashboard_coin_switch_targets_new_coin() {
    let mock = MockTransport::new();
    let client = client_with(mock.clone());

    let mut dashboard = Dashboard::new();
    let fetch = dashboard.select_coin("ethereum");
    dashboard.run(&client, fetch).await;

    assert!(mock.urls().iter().all(|u| u.contains("/ethereum")));
    assert_eq!(dashboard.price_card().title, "Ethereum Price");
}

#[tokio::test]
async fn test_analytics_window_panels_are_independent() {
    let mock = MockTransport::new();
    mock.on(
        "/average/bitcoin",
        200,
        r#"{"coin_id":"bitcoin","average":43010.0,"data_points":60,
            "start":"2024-01-15T11:00:00Z","end":"2024-01-15T12:00:00Z"}"#,
    );
    mock.on("/volatility/bitcoin", 200, VOLATILITY_BTC);
    mock.on("/range/bitcoin", 400, "Invalid start time");
    mock.fail("/trend/bitcoin", "connection reset");
    let client = client_with(mock.clone());

    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let presets = time_range_presets_at(now);
    let mut page = AnalyticsPage::new();
    page.fetch_window(&client, &presets[0]).await;

    assert_eq!(mock.count(), 4);
    assert!(page.average().is_some());
    assert!(page.volatility().is_some());
    assert!(page.range().is_none());
    assert_eq!(page.errors(), vec![RANGE_FAILED, TREND_FAILED]);
    assert_eq!(page.stat_cards().len(), 2);
    assert!(!page.is_loading());
}

#[tokio::test]
async fn test_analytics_mount_loads_hourly_movers() {
    let mock = MockTransport::new();
    mock.on("/top-movers", 200, TOP_MOVERS);
    let client = client_with(mock.clone());

    let mut page = AnalyticsPage::new();
    page.mount(&client).await;

    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/top-movers?minutes=60")]);
    let list = page.movers_list();
    assert_eq!(list.rows[0].rank, "#1");
    assert_eq!(list.rows[0].coin, "SOLANA");
}

#[tokio::test]
async fn test_ml_mount_with_one_failed_signal() {
    let mock = MockTransport::new();
    mock.on("/trend/bitcoin", 200, TREND_BTC);
    mock.on("/volatility/bitcoin", 500, "Query error");
    mock.on("/top-movers", 200, TOP_MOVERS);
    mock.on("/predict/bitcoin", 200, PREDICTION_BTC);
    let client = client_with(mock.clone());

    let mut page = MlInsightsPage::new();
    page.mount(&client).await;

    assert_eq!(mock.count(), 4);
    assert!(mock
        .urls()
        .contains(&format!("{BASE_URL}/top-movers?minutes=1440")));
    assert!(mock
        .urls()
        .contains(&format!("{BASE_URL}/predict/bitcoin?horizon_minutes=60")));
    assert_eq!(page.signals_error(), Some(SIGNALS_FAILED));
    assert!(page.trend_card().is_some());
    assert!(page.volatility_card().is_none());
    assert_eq!(page.momentum_list().rows.len(), 2);
    assert!(page.prediction_card().is_some());
}

#[tokio::test]
async fn test_ml_prediction_failure_clears_card() {
    let mock = MockTransport::new();
    mock.on("/predict/bitcoin", 200, PREDICTION_BTC);
    let client = client_with(mock.clone());

    let mut page = MlInsightsPage::new();
    page.refresh_prediction(&client).await;
    assert!(page.prediction().is_some());

    mock.on("/predict/bitcoin", 500, "insufficient data");
    let fetch = page.set_horizon(1440);
    page.run_prediction(&client, fetch).await;
    assert!(page.prediction().is_none());
    assert_eq!(page.prediction_error(), Some(PREDICTION_FAILED));
}

#[tokio::test]
async fn test_top_movers_refresh_after_window_change() {
    let mock = MockTransport::new();
    mock.on("/top-movers", 200, "null");
    let client = client_with(mock.clone());

    let mut page = TopMoversPage::new();
    let fetch = page.set_window(360);
    page.run(&client, fetch).await;

    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/top-movers?minutes=360")]);
    assert!(page.error().is_none());
    assert!(page.list().rows.is_empty());
}

#[tokio::test]
async fn test_subscription_form_invalid_email_makes_no_call() {
    let mock = MockTransport::new();
    let client = client_with(mock.clone());

    let mut form = SubscriptionForm::new();
    form.set_email("a@b");
    form.submit(&client, SubscriptionMode::Subscribe).await;

    assert_eq!(form.error(), Some(INVALID_EMAIL));
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn test_subscription_form_round_trip() {
    let mock = MockTransport::new();
    mock.on("/subscribe", 200, "{}");
    mock.on("/unsubscribe", 404, "Email not found");
    let client = client_with(mock.clone());

    let mut form = SubscriptionForm::new();
    form.set_email("you@example.com");
    form.submit(&client, SubscriptionMode::Subscribe).await;
    assert_eq!(form.message(), Some("Subscription successful"));
    assert_eq!(form.email(), "");

    form.set_email("you@example.com");
    form.submit(&client, SubscriptionMode::Unsubscribe).await;
    assert_eq!(form.error(), Some("Email not found"));
    assert!(form.message().is_none());
    assert_eq!(mock.count(), 2);
}

#[tokio::test]
async fn test_transcript_records_both_sides() {
    let mock = MockTransport::new();
    mock.on("/ask", 200, &format!("[{LATEST_BTC}]"));
    let client = client_with(mock.clone());

    let mut transcript = Transcript::new();
    transcript.ask(&client, "   ").await;
    assert_eq!(mock.count(), 0);

    transcript.ask(&client, "bitcoin now").await;
    mock.fail("/ask", "timeout");
    transcript.ask(&client, "and ethereum?").await;

    let messages = transcript.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, ChatRole::User);
    assert_eq!(messages[1].results.as_ref().map(Vec::len), Some(1));
    assert_eq!(messages[2].text.as_deref(), Some("and ethereum?"));
    assert_eq!(messages[3].text.as_deref(), Some(ASK_FAILED));
    assert!(!transcript.is_loading());
}

#[tokio::test]
async fn test_shell_refreshes_only_active_page() {
    let mock = MockTransport::new();
    mock.on("/top-movers", 200, TOP_MOVERS);
    let client = client_with(mock.clone());

    let mut shell = Shell::new();
    shell.navigate("/top-movers");
    shell.refresh_active(&client).await;
    assert_eq!(mock.urls(), vec![format!("{BASE_URL}/top-movers?minutes=1440")]);
    assert_eq!(shell.top_movers.movers().len(), 2);

    shell.navigate("/subscribe");
    shell.refresh_active(&client).await;
    assert_eq!(mock.count(), 1);
}
