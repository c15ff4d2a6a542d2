//! Advanced analytics page — windowed aggregates, point-in-time lookup,
//! hourly movers and the chat assistant.
//!
//! Each panel resolves into its own [`Slot`], so one failing aggregate never
//! blanks the others.

use crate::client::CryptoClient;
use crate::domain::analytics::{AverageStat, RangeStat, TimeRangePreset, TrendStat, VolatilityStat};
use crate::domain::ask::Transcript;
use crate::domain::coin::CoinManager;
use crate::domain::mover::TopMover;
use crate::domain::price::PricePoint;
use crate::error::SdkError;
use crate::shared::{CoinId, Slot, Ticket, TimeWindow};
use crate::view::panels::{MoverList, StatCard, TranscriptView};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

pub const AVERAGE_FAILED: &str = "Failed to fetch average price data";
pub const RANGE_FAILED: &str = "Failed to fetch price range data";
pub const VOLATILITY_FAILED: &str = "Failed to fetch volatility data";
pub const TREND_FAILED: &str = "Failed to fetch trend data";
pub const PRICE_AT_FAILED: &str = "Failed to fetch price at specified time";
pub const MOVERS_FAILED: &str = "Failed to fetch top movers data";

/// Window used by the movers panel on this page.
pub const ANALYTICS_MOVER_MINUTES: u32 = 60;

/// Tickets for the four aggregate requests issued by one preset selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFetch {
    pub coin: CoinId,
    pub window: TimeWindow,
    pub average: Ticket,
    pub range: Ticket,
    pub volatility: Ticket,
    pub trend: Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceAtFetch {
    pub coin: CoinId,
    pub instant: DateTime<Utc>,
    pub ticket: Ticket,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsPage {
    coin: CoinId,
    coin_manager_open: bool,
    coin_manager: CoinManager,
    selected_range: Option<String>,
    average: Slot<AverageStat>,
    range: Slot<RangeStat>,
    volatility: Slot<VolatilityStat>,
    trend: Slot<TrendStat>,
    price_at: Slot<PricePoint>,
    movers: Slot<Vec<TopMover>>,
    transcript: Transcript,
}

impl AnalyticsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch coins and close the coin manager. Results for the previous
    /// coin are dropped, along with any request still in flight for it.
    pub fn select_coin(&mut self, coin: impl Into<CoinId>) {
        let coin = coin.into();
        self.coin_manager_open = false;
        if coin == self.coin {
            return;
        }
        self.coin = coin;
        self.selected_range = None;
        self.average.reset();
        self.range.reset();
        self.volatility.reset();
        self.trend.reset();
        self.price_at.reset();
    }

    /// Opening the panel starts a fetch of the coin list.
    pub fn toggle_coin_manager(&mut self) -> Option<Ticket> {
        self.coin_manager_open = !self.coin_manager_open;
        self.coin_manager_open.then(|| self.coin_manager.begin_refresh())
    }

    pub fn apply_coins(&mut self, ticket: Ticket, result: Result<Vec<String>, SdkError>) {
        self.coin_manager.finish_refresh(ticket, result);
    }

    pub async fn toggle_and_load_coin_manager(&mut self, client: &CryptoClient) {
        if let Some(ticket) = self.toggle_coin_manager() {
            let result = client.coins().available().await;
            self.apply_coins(ticket, result);
        }
    }

    // ── Aggregates ───────────────────────────────────────────────────────

    pub fn select_time_range(&mut self, preset: &TimeRangePreset) -> WindowFetch {
        self.selected_range = Some(preset.window.to_string());
        WindowFetch {
            coin: self.coin.clone(),
            window: preset.window,
            average: self.average.begin(),
            range: self.range.begin(),
            volatility: self.volatility.begin(),
            trend: self.trend.begin(),
        }
    }

    pub fn apply_average(&mut self, ticket: Ticket, result: Result<AverageStat, SdkError>) -> bool {
        self.average.finish(ticket, result, AVERAGE_FAILED)
    }

    pub fn apply_range(&mut self, ticket: Ticket, result: Result<RangeStat, SdkError>) -> bool {
        self.range.finish(ticket, result, RANGE_FAILED)
    }

    pub fn apply_volatility(
        &mut self,
        ticket: Ticket,
        result: Result<VolatilityStat, SdkError>,
    ) -> bool {
        self.volatility.finish(ticket, result, VOLATILITY_FAILED)
    }

    pub fn apply_trend(&mut self, ticket: Ticket, result: Result<TrendStat, SdkError>) -> bool {
        self.trend.finish(ticket, result, TREND_FAILED)
    }

    /// Select `preset` and run its four requests concurrently.
    pub async fn fetch_window(&mut self, client: &CryptoClient, preset: &TimeRangePreset) {
        let fetch = self.select_time_range(preset);
        let coin = fetch.coin.as_str();
        let analytics = client.analytics();
        let (average, range, volatility, trend) = futures_util::join!(
            analytics.average(coin, &fetch.window),
            analytics.range(coin, &fetch.window),
            analytics.volatility(coin, &fetch.window),
            analytics.trend(coin, &fetch.window),
        );
        self.apply_average(fetch.average, average);
        self.apply_range(fetch.range, range);
        self.apply_volatility(fetch.volatility, volatility);
        self.apply_trend(fetch.trend, trend);
    }

    // ── Point-in-time lookup ─────────────────────────────────────────────

    pub fn begin_price_at(&mut self, instant: DateTime<Utc>) -> PriceAtFetch {
        PriceAtFetch {
            coin: self.coin.clone(),
            instant,
            ticket: self.price_at.begin(),
        }
    }

    pub fn apply_price_at(&mut self, ticket: Ticket, result: Result<PricePoint, SdkError>) -> bool {
        self.price_at.finish(ticket, result, PRICE_AT_FAILED)
    }

    pub async fn lookup_price_at(&mut self, client: &CryptoClient, instant: DateTime<Utc>) {
        let fetch = self.begin_price_at(instant);
        let result = client.prices().at(fetch.coin.as_str(), &fetch.instant).await;
        self.apply_price_at(fetch.ticket, result);
    }

    // ── Movers ───────────────────────────────────────────────────────────

    pub fn begin_movers(&mut self) -> Ticket {
        self.movers.begin()
    }

    pub fn apply_movers(&mut self, ticket: Ticket, result: Result<Vec<TopMover>, SdkError>) -> bool {
        self.movers.finish(ticket, result, MOVERS_FAILED)
    }

    /// Initial load: the hourly movers panel.
    pub async fn mount(&mut self, client: &CryptoClient) {
        let ticket = self.begin_movers();
        let result = client.movers().top(ANALYTICS_MOVER_MINUTES).await;
        self.apply_movers(ticket, result);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn coin(&self) -> &CoinId {
        &self.coin
    }

    /// `"{start} to {end}"` of the last selected preset.
    pub fn selected_range(&self) -> Option<&str> {
        self.selected_range.as_deref()
    }

    pub fn average(&self) -> Option<&AverageStat> {
        self.average.data()
    }

    pub fn range(&self) -> Option<&RangeStat> {
        self.range.data()
    }

    pub fn volatility(&self) -> Option<&VolatilityStat> {
        self.volatility.data()
    }

    pub fn trend(&self) -> Option<&TrendStat> {
        self.trend.data()
    }

    pub fn price_at(&self) -> Option<&PricePoint> {
        self.price_at.data()
    }

    pub fn movers(&self) -> &[TopMover] {
        self.movers.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.average.is_loading()
            || self.range.is_loading()
            || self.volatility.is_loading()
            || self.trend.is_loading()
            || self.price_at.is_loading()
            || self.movers.is_loading()
    }

    /// Visible error messages, one per failed panel.
    pub fn errors(&self) -> Vec<&str> {
        [
            self.average.error(),
            self.range.error(),
            self.volatility.error(),
            self.trend.error(),
            self.price_at.error(),
            self.movers.error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn coin_manager_open(&self) -> bool {
        self.coin_manager_open
    }

    pub fn coin_manager(&self) -> &CoinManager {
        &self.coin_manager
    }

    pub fn coin_manager_mut(&mut self) -> &mut CoinManager {
        &mut self.coin_manager
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    // ── Panels ───────────────────────────────────────────────────────────

    /// Aggregate cards that currently have data, in page order.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        let mut cards = Vec::new();
        if let Some(a) = self.average() {
            cards.push(StatCard::average(a));
        }
        if let Some(r) = self.range() {
            cards.push(StatCard::range(r));
        }
        if let Some(v) = self.volatility() {
            cards.push(StatCard::volatility(v));
        }
        if let Some(t) = self.trend() {
            cards.push(StatCard::trend(t));
        }
        if let Some(p) = self.price_at() {
            cards.push(StatCard::price_at(p, &Local));
        }
        cards
    }

    pub fn movers_list(&self) -> MoverList {
        MoverList::build("Top Movers (1h)", self.movers(), None)
    }

    pub fn transcript_view(&self) -> TranscriptView {
        TranscriptView::build(self.transcript.messages(), &Local)
    }
}

/// Parse a user-entered instant: RFC 3339, or a `datetime-local` style
/// `YYYY-MM-DDTHH:MM[:SS]` read in the local timezone.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, SdkError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map_err(|e| SdkError::Validation(format!("invalid timestamp {input:?}: {e}")))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| SdkError::Validation(format!("nonexistent local time {input:?}")))
}
