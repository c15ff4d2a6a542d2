//! Top movers domain — coins ranked by price change over a window.

pub mod client;

use crate::domain::analytics::TrendDirection;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// One ranked entry. The list order is the server's ranking and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub coin_id: CoinId,
    pub start_price: f64,
    pub end_price: f64,
    pub percent_change: f64,
}

impl TopMover {
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_change(self.percent_change)
    }
}

/// A selectable top-movers window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoverWindow {
    pub label: &'static str,
    pub minutes: u32,
}

/// Windows offered on the top movers page.
pub const MOVER_WINDOWS: [MoverWindow; 4] = [
    MoverWindow { label: "1 hour", minutes: 60 },
    MoverWindow { label: "6 hours", minutes: 360 },
    MoverWindow { label: "24 hours", minutes: 1440 },
    MoverWindow { label: "7 days", minutes: 10080 },
];

/// Window the top movers page opens with.
pub const DEFAULT_MOVER_MINUTES: u32 = 1440;
