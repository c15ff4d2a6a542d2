//! Prediction domain — opaque ML price forecasts.

pub mod client;

use crate::domain::analytics::TrendDirection;
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Forecast for one coin at the end of a horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub coin_id: CoinId,
    pub horizon_minutes: u32,
    pub predicted_price: f64,
    pub price_low: f64,
    pub price_high: f64,
    pub trend: String,
    pub slope: f64,
    pub data_points: u64,
    pub predicted_at: DateTime<Utc>,
    pub horizon_end_time: DateTime<Utc>,
}

impl Prediction {
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_label(&self.trend)
    }
}

/// A selectable forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub label: &'static str,
    pub minutes: u32,
}

pub const HORIZONS: [Horizon; 3] = [
    Horizon { label: "1 hour", minutes: 60 },
    Horizon { label: "6 hours", minutes: 360 },
    Horizon { label: "24 hours", minutes: 1440 },
];

pub const DEFAULT_HORIZON_MINUTES: u32 = 60;
