//! ML insights page — forecast, trend/volatility signals, daily momentum and
//! the chat assistant.

use crate::client::CryptoClient;
use crate::domain::analytics::{time_range_presets, TrendStat, VolatilityStat};
use crate::domain::ask::Transcript;
use crate::domain::mover::TopMover;
use crate::domain::prediction::{Prediction, DEFAULT_HORIZON_MINUTES};
use crate::error::SdkError;
use crate::shared::{CoinId, Slot, Ticket, TimeWindow};
use crate::view::panels::{MoverList, StatCard, TranscriptView};

use chrono::{Duration, Local, Utc};

pub const SIGNALS_FAILED: &str = "Failed to load ML signals";
pub const TREND_SIGNAL_FAILED: &str = "Failed to load trend signal";
pub const VOLATILITY_SIGNAL_FAILED: &str = "Failed to load volatility signal";
pub const MOMENTUM_SIGNAL_FAILED: &str = "Failed to load momentum signal";
pub const PREDICTION_FAILED: &str = "Failed to load prediction";

/// Movers window for the momentum panel.
pub const MOMENTUM_MINUTES: u32 = 1440;
/// Rows shown in the momentum panel.
pub const MOMENTUM_ROWS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalsFetch {
    pub coin: CoinId,
    pub window: TimeWindow,
    pub trend: Ticket,
    pub volatility: Ticket,
    pub movers: Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionFetch {
    pub coin: CoinId,
    pub horizon_minutes: u32,
    pub ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct MlInsightsPage {
    coin: CoinId,
    horizon_minutes: u32,
    trend: Slot<TrendStat>,
    volatility: Slot<VolatilityStat>,
    movers: Slot<Vec<TopMover>>,
    prediction: Slot<Prediction>,
    transcript: Transcript,
}

impl Default for MlInsightsPage {
    fn default() -> Self {
        Self {
            coin: CoinId::default(),
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
            trend: Slot::new(),
            volatility: Slot::new(),
            movers: Slot::new(),
            prediction: Slot::new(),
            transcript: Transcript::new(),
        }
    }
}

/// The 24-hour preset window, ending now.
fn default_signal_window() -> TimeWindow {
    time_range_presets()
        .get(1)
        .map(|p| p.window)
        .unwrap_or_else(|| TimeWindow::ending_at(Utc::now(), Duration::hours(24)))
}

impl MlInsightsPage {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Switch coins. Both the signals (over the 24h window) and the
    /// prediction are refetched.
    #[must_use]
    pub fn select_coin(&mut self, coin: impl Into<CoinId>) -> (SignalsFetch, PredictionFetch) {
        self.coin = coin.into();
        self.begin_mount()
    }

    /// Start the page's initial fetches: 24h signals and the prediction.
    pub fn begin_mount(&mut self) -> (SignalsFetch, PredictionFetch) {
        let signals = self.begin_signals(default_signal_window());
        let prediction = self.begin_prediction();
        (signals, prediction)
    }

    /// Change the forecast horizon; only the prediction is refetched.
    #[must_use]
    pub fn set_horizon(&mut self, minutes: u32) -> PredictionFetch {
        self.horizon_minutes = minutes;
        self.begin_prediction()
    }

    pub fn begin_signals(&mut self, window: TimeWindow) -> SignalsFetch {
        SignalsFetch {
            coin: self.coin.clone(),
            window,
            trend: self.trend.begin(),
            volatility: self.volatility.begin(),
            movers: self.movers.begin(),
        }
    }

    pub fn begin_prediction(&mut self) -> PredictionFetch {
        PredictionFetch {
            coin: self.coin.clone(),
            horizon_minutes: self.horizon_minutes,
            ticket: self.prediction.begin(),
        }
    }

    pub fn apply_trend(&mut self, ticket: Ticket, result: Result<TrendStat, SdkError>) -> bool {
        self.trend.finish(ticket, result, TREND_SIGNAL_FAILED)
    }

    pub fn apply_volatility(
        &mut self,
        ticket: Ticket,
        result: Result<VolatilityStat, SdkError>,
    ) -> bool {
        self.volatility.finish(ticket, result, VOLATILITY_SIGNAL_FAILED)
    }

    pub fn apply_movers(&mut self, ticket: Ticket, result: Result<Vec<TopMover>, SdkError>) -> bool {
        self.movers.finish(ticket, result, MOMENTUM_SIGNAL_FAILED)
    }

    /// A failed prediction clears the previous one.
    pub fn apply_prediction(&mut self, ticket: Ticket, result: Result<Prediction, SdkError>) -> bool {
        self.prediction.finish_or_clear(ticket, result, PREDICTION_FAILED)
    }

    // ── Drivers ──────────────────────────────────────────────────────────

    pub async fn run_signals(&mut self, client: &CryptoClient, fetch: SignalsFetch) {
        let coin = fetch.coin.as_str();
        let (analytics, movers) = (client.analytics(), client.movers());
        let (trend, volatility, movers) = futures_util::join!(
            analytics.trend(coin, &fetch.window),
            analytics.volatility(coin, &fetch.window),
            movers.top(MOMENTUM_MINUTES),
        );
        self.apply_trend(fetch.trend, trend);
        self.apply_volatility(fetch.volatility, volatility);
        self.apply_movers(fetch.movers, movers);
    }

    pub async fn run_prediction(&mut self, client: &CryptoClient, fetch: PredictionFetch) {
        let result = client
            .predictions()
            .predict(fetch.coin.as_str(), fetch.horizon_minutes, None)
            .await;
        self.apply_prediction(fetch.ticket, result);
    }

    /// Refetch signals over `window` (one of the preset buttons).
    pub async fn fetch_signals(&mut self, client: &CryptoClient, window: TimeWindow) {
        let fetch = self.begin_signals(window);
        self.run_signals(client, fetch).await;
    }

    pub async fn refresh_prediction(&mut self, client: &CryptoClient) {
        let fetch = self.begin_prediction();
        self.run_prediction(client, fetch).await;
    }

    /// Initial load: 24h signals and the prediction, all concurrently.
    pub async fn mount(&mut self, client: &CryptoClient) {
        let (signals, prediction) = self.begin_mount();
        self.run_all(client, signals, prediction).await;
    }

    /// Run a signals fetch and a prediction fetch concurrently.
    pub async fn run_all(
        &mut self,
        client: &CryptoClient,
        signals: SignalsFetch,
        prediction: PredictionFetch,
    ) {
        let coin = signals.coin.as_str();
        let (analytics, movers, predictions) =
            (client.analytics(), client.movers(), client.predictions());
        let (trend, volatility, movers, predicted) = futures_util::join!(
            analytics.trend(coin, &signals.window),
            analytics.volatility(coin, &signals.window),
            movers.top(MOMENTUM_MINUTES),
            predictions.predict(prediction.coin.as_str(), prediction.horizon_minutes, None),
        );
        self.apply_trend(signals.trend, trend);
        self.apply_volatility(signals.volatility, volatility);
        self.apply_movers(signals.movers, movers);
        self.apply_prediction(prediction.ticket, predicted);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn coin(&self) -> &CoinId {
        &self.coin
    }

    pub fn horizon_minutes(&self) -> u32 {
        self.horizon_minutes
    }

    pub fn trend(&self) -> Option<&TrendStat> {
        self.trend.data()
    }

    pub fn volatility(&self) -> Option<&VolatilityStat> {
        self.volatility.data()
    }

    pub fn movers(&self) -> &[TopMover] {
        self.movers.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.data()
    }

    pub fn signals_loading(&self) -> bool {
        self.trend.is_loading() || self.volatility.is_loading() || self.movers.is_loading()
    }

    pub fn prediction_loading(&self) -> bool {
        self.prediction.is_loading()
    }

    /// Page-level summary: set when any signal failed.
    pub fn signals_error(&self) -> Option<&'static str> {
        let failed = self.trend.error().is_some()
            || self.volatility.error().is_some()
            || self.movers.error().is_some();
        failed.then_some(SIGNALS_FAILED)
    }

    /// Per-signal error messages.
    pub fn signal_errors(&self) -> Vec<&str> {
        [self.trend.error(), self.volatility.error(), self.movers.error()]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn prediction_error(&self) -> Option<&str> {
        self.prediction.error()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    // ── Panels ───────────────────────────────────────────────────────────

    pub fn prediction_card(&self) -> Option<StatCard> {
        self.prediction().map(|p| StatCard::prediction(p, &Local))
    }

    pub fn trend_card(&self) -> Option<StatCard> {
        self.trend().map(StatCard::trend)
    }

    pub fn volatility_card(&self) -> Option<StatCard> {
        self.volatility().map(StatCard::volatility)
    }

    pub fn momentum_list(&self) -> MoverList {
        MoverList::build("Momentum (Top Movers)", self.movers(), Some(MOMENTUM_ROWS))
    }

    pub fn transcript_view(&self) -> TranscriptView {
        TranscriptView::build(self.transcript.messages(), &Local)
    }
}
