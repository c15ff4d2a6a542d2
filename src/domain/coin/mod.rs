//! Coin domain — the static catalog of tracked coins and the server's coin list.

pub mod client;
pub mod state;

use crate::shared::CoinId;

pub use state::CoinManager;

/// Display metadata for a tracked coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// CSS hex color used for the chart stroke.
    pub color: &'static str,
}

/// Coins offered by the selectors, in display order.
pub const DEFAULT_COINS: [CoinInfo; 6] = [
    CoinInfo { id: "bitcoin", name: "Bitcoin", symbol: "BTC", color: "#f7931a" },
    CoinInfo { id: "ethereum", name: "Ethereum", symbol: "ETH", color: "#627eea" },
    CoinInfo { id: "cardano", name: "Cardano", symbol: "ADA", color: "#0033ad" },
    CoinInfo { id: "solana", name: "Solana", symbol: "SOL", color: "#14f195" },
    CoinInfo { id: "polkadot", name: "Polkadot", symbol: "DOT", color: "#e6007a" },
    CoinInfo { id: "chainlink", name: "Chainlink", symbol: "LINK", color: "#2a5ada" },
];

/// Chart color for coins outside the catalog.
pub const FALLBACK_COLOR: &str = "#d4af37";

/// Look up catalog metadata by id.
pub fn find_coin(id: &CoinId) -> Option<&'static CoinInfo> {
    DEFAULT_COINS.iter().find(|c| c.id == id.as_str())
}

/// Catalog display name, or the raw id for coins outside the catalog.
pub fn display_name(id: &CoinId) -> String {
    find_coin(id)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Catalog chart color, or [`FALLBACK_COLOR`].
pub fn chart_color(id: &CoinId) -> &'static str {
    find_coin(id).map(|c| c.color).unwrap_or(FALLBACK_COLOR)
}
