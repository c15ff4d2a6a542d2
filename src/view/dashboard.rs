//! Dashboard page — latest price, history chart and stats for one coin.

use crate::client::CryptoClient;
use crate::domain::coin::{chart_color, display_name, CoinManager};
use crate::domain::price::{PricePoint, DEFAULT_HISTORY_MINUTES};
use crate::error::SdkError;
use crate::shared::{CoinId, Slot, Ticket};
use crate::view::panels::{ChartCard, PriceCard, StatsCard};

pub const LATEST_FAILED: &str = "Failed to fetch latest price";
pub const HISTORY_FAILED: &str = "Failed to fetch price history";

/// The latest + history pair issued by one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFetch {
    pub coin: CoinId,
    pub minutes: u32,
    pub latest: Ticket,
    pub history: Ticket,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    coin: CoinId,
    time_range: u32,
    latest: Slot<PricePoint>,
    history: Slot<Vec<PricePoint>>,
    error: Option<String>,
    coin_manager_open: bool,
    coin_manager: CoinManager,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            coin: CoinId::default(),
            time_range: DEFAULT_HISTORY_MINUTES,
            latest: Slot::new(),
            history: Slot::new(),
            error: None,
            coin_manager_open: false,
            coin_manager: CoinManager::new(),
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Switch coins. Closes the coin manager and returns the fetch pair to run.
    #[must_use]
    pub fn select_coin(&mut self, coin: impl Into<CoinId>) -> DashboardFetch {
        self.coin = coin.into();
        self.coin_manager_open = false;
        self.begin_refresh()
    }

    #[must_use]
    pub fn set_time_range(&mut self, minutes: u32) -> DashboardFetch {
        self.time_range = minutes;
        self.begin_refresh()
    }

    /// Opening the panel starts a fetch of the coin list; closing it returns `None`.
    pub fn toggle_coin_manager(&mut self) -> Option<Ticket> {
        self.coin_manager_open = !self.coin_manager_open;
        self.coin_manager_open.then(|| self.coin_manager.begin_refresh())
    }

    pub fn apply_coins(&mut self, ticket: Ticket, result: Result<Vec<String>, SdkError>) {
        self.coin_manager.finish_refresh(ticket, result);
    }

    /// Open or close the coin manager, fetching the list when it opens.
    pub async fn toggle_and_load_coin_manager(&mut self, client: &CryptoClient) {
        if let Some(ticket) = self.toggle_coin_manager() {
            let result = client.coins().available().await;
            self.apply_coins(ticket, result);
        }
    }

    /// Start a latest + history fetch for the current selection.
    pub fn begin_refresh(&mut self) -> DashboardFetch {
        DashboardFetch {
            coin: self.coin.clone(),
            minutes: self.time_range,
            latest: self.latest.begin(),
            history: self.history.begin(),
        }
    }

    /// Returns `false` if the response was stale and dropped.
    pub fn apply_latest(&mut self, ticket: Ticket, result: Result<PricePoint, SdkError>) -> bool {
        let failed = result.is_err();
        if !self.latest.finish(ticket, result, LATEST_FAILED) {
            return false;
        }
        if failed {
            self.error = Some(LATEST_FAILED.to_string());
        }
        true
    }

    /// A successful history response clears errors left by earlier fetches.
    /// A latest-price failure from the same pair stays visible.
    pub fn apply_history(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<PricePoint>, SdkError>,
    ) -> bool {
        let failed = result.is_err();
        if !self.history.finish(ticket, result, HISTORY_FAILED) {
            return false;
        }
        self.error = if failed {
            Some(HISTORY_FAILED.to_string())
        } else {
            self.latest.error().map(str::to_string)
        };
        true
    }

    /// Issue both requests of `fetch` concurrently and apply the results.
    pub async fn run(&mut self, client: &CryptoClient, fetch: DashboardFetch) {
        let coin = fetch.coin.as_str();
        let prices = client.prices();
        let (latest, history) =
            futures_util::join!(prices.latest(coin), prices.history(coin, fetch.minutes));
        self.apply_latest(fetch.latest, latest);
        self.apply_history(fetch.history, history);
    }

    pub async fn refresh(&mut self, client: &CryptoClient) {
        let fetch = self.begin_refresh();
        self.run(client, fetch).await;
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn coin(&self) -> &CoinId {
        &self.coin
    }

    pub fn time_range(&self) -> u32 {
        self.time_range
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.latest.data()
    }

    pub fn history(&self) -> &[PricePoint] {
        self.history.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.history.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
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

    // ── Panels ───────────────────────────────────────────────────────────

    pub fn price_card(&self) -> PriceCard {
        PriceCard::build(&display_name(&self.coin), self.latest(), self.history())
    }

    pub fn chart_card(&self) -> ChartCard {
        ChartCard::build(self.history(), self.is_loading(), chart_color(&self.coin))
    }

    pub fn stats_card(&self) -> StatsCard {
        StatsCard::build(self.history())
    }
}
