//! Analytics domain — server-computed aggregates over a time window, plus
//! the client-side window presets used to request them.

pub mod client;

use crate::shared::{CoinId, TimeWindow};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Mean price over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageStat {
    pub coin_id: CoinId,
    pub average: f64,
    pub data_points: u64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Min / max over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStat {
    pub coin_id: CoinId,
    pub min: f64,
    pub max: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Standard deviation and mean over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityStat {
    pub coin_id: CoinId,
    pub stddev_price: f64,
    pub mean_price: f64,
    pub data_points: u64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Regression slope and its server-assigned label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStat {
    pub coin_id: CoinId,
    pub slope: f64,
    pub trend: String,
    pub data_points: u64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TrendStat {
    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_label(&self.trend)
    }
}

/// Display classification of a trend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

impl TrendDirection {
    /// `"Uptrend"` / `"Downtrend"` (any case); everything else is neutral.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "uptrend" => Self::Up,
            "downtrend" => Self::Down,
            _ => Self::Neutral,
        }
    }

    /// Classify a signed change (zero counts as up, like the price card).
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "positive",
            Self::Down => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Time range presets ──────────────────────────────────────────────────────

/// A labelled aggregate window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangePreset {
    pub label: &'static str,
    pub window: TimeWindow,
}

const PRESET_LOOKBACKS: [(&str, i64); 4] = [
    ("Last hour", 60),
    ("Last 24 hours", 24 * 60),
    ("Last 7 days", 7 * 24 * 60),
    ("Last 30 days", 30 * 24 * 60),
];

/// Presets ending at `now`: last hour, 24 hours, 7 days, 30 days.
pub fn time_range_presets_at(now: DateTime<Utc>) -> Vec<TimeRangePreset> {
    PRESET_LOOKBACKS
        .iter()
        .map(|&(label, minutes)| TimeRangePreset {
            label,
            window: TimeWindow::ending_at(now, Duration::minutes(minutes)),
        })
        .collect()
}

/// Presets ending at the current instant. Not cached.
pub fn time_range_presets() -> Vec<TimeRangePreset> {
    time_range_presets_at(Utc::now())
}
