//! Coin manager state — the server's coin list, app-owned.

use crate::client::CryptoClient;
use crate::error::SdkError;
use crate::shared::{Slot, Ticket};

const FETCH_FAILED: &str = "Failed to fetch available coins";

/// Auxiliary panel listing every coin the backend knows about.
///
/// Selecting an entry is reported upward by the owning page; this type only
/// holds the list.
#[derive(Debug, Clone, Default)]
pub struct CoinManager {
    coins: Slot<Vec<String>>,
}

impl CoinManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&mut self) -> Ticket {
        self.coins.begin()
    }

    pub fn finish_refresh(&mut self, ticket: Ticket, result: Result<Vec<String>, SdkError>) {
        self.coins.finish(ticket, result, FETCH_FAILED);
    }

    /// Fetch the list (on mount, and on every refresh press).
    pub async fn refresh(&mut self, client: &CryptoClient) {
        let ticket = self.begin_refresh();
        let result = client.coins().available().await;
        self.finish_refresh(ticket, result);
    }

    pub fn coins(&self) -> &[String] {
        self.coins.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Ids as shown on the buttons.
    pub fn display_ids(&self) -> Vec<String> {
        self.coins().iter().map(|c| c.to_uppercase()).collect()
    }

    pub fn count_label(&self) -> String {
        format!("Total: {} coins available", self.coins().len())
    }

    pub fn is_loading(&self) -> bool {
        self.coins.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.coins.error()
    }
}
