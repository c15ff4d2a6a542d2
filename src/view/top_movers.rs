//! Top movers page.

use crate::client::CryptoClient;
use crate::domain::mover::{TopMover, DEFAULT_MOVER_MINUTES, MOVER_WINDOWS};
use crate::error::SdkError;
use crate::shared::{Slot, Ticket};
use crate::view::panels::MoverList;

pub const MOVERS_FAILED: &str = "Failed to fetch top movers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoversFetch {
    pub minutes: u32,
    pub ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct TopMoversPage {
    minutes: u32,
    movers: Slot<Vec<TopMover>>,
}

impl Default for TopMoversPage {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MOVER_MINUTES,
            movers: Slot::new(),
        }
    }
}

impl TopMoversPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window(&mut self, minutes: u32) -> MoversFetch {
        self.minutes = minutes;
        self.begin_refresh()
    }

    pub fn begin_refresh(&mut self) -> MoversFetch {
        MoversFetch {
            minutes: self.minutes,
            ticket: self.movers.begin(),
        }
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<TopMover>, SdkError>) -> bool {
        self.movers.finish(ticket, result, MOVERS_FAILED)
    }

    pub async fn run(&mut self, client: &CryptoClient, fetch: MoversFetch) {
        let result = client.movers().top(fetch.minutes).await;
        self.apply(fetch.ticket, result);
    }

    /// Fetch for the current window (mount, window change, refresh button).
    pub async fn refresh(&mut self, client: &CryptoClient) {
        let fetch = self.begin_refresh();
        self.run(client, fetch).await;
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Label of the current window, or `"{n} minutes"` for a custom one.
    pub fn window_label(&self) -> String {
        MOVER_WINDOWS
            .iter()
            .find(|w| w.minutes == self.minutes)
            .map(|w| w.label.to_string())
            .unwrap_or_else(|| format!("{} minutes", self.minutes))
    }

    pub fn movers(&self) -> &[TopMover] {
        self.movers.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.movers.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.movers.error()
    }

    pub fn list(&self) -> MoverList {
        MoverList::build(
            &format!("Top Movers ({})", self.window_label()),
            self.movers(),
            None,
        )
    }
}
