//! Price domain — spot observations, history series, derived change metrics.

pub mod client;

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price observation for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub coin_id: CoinId,
    pub timestamp: DateTime<Utc>,
    pub price_usd: f64,
}

/// High / low / average over a series, as shown on the stats card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub high: f64,
    pub low: f64,
    pub average: f64,
}

/// A selectable history lookback for the dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRange {
    pub label: &'static str,
    pub minutes: u32,
}

/// Dashboard history lookbacks, in display order.
pub const HISTORY_RANGES: [HistoryRange; 6] = [
    HistoryRange { label: "15 minutes", minutes: 15 },
    HistoryRange { label: "30 minutes", minutes: 30 },
    HistoryRange { label: "1 hour", minutes: 60 },
    HistoryRange { label: "2 hours", minutes: 120 },
    HistoryRange { label: "4 hours", minutes: 240 },
    HistoryRange { label: "24 hours", minutes: 1440 },
];

/// Lookback used when the dashboard first mounts.
pub const DEFAULT_HISTORY_MINUTES: u32 = 60;

/// Percent change from the first to the last point of `series`, in the order given.
///
/// Returns `0.0` for fewer than two points, or when the first price is zero.
pub fn percent_change(series: &[PricePoint]) -> f64 {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) if series.len() >= 2 => (first.price_usd, last.price_usd),
        _ => return 0.0,
    };
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

/// Copy of `series` sorted ascending by timestamp (stable for equal instants).
pub fn sort_chronological(series: &[PricePoint]) -> Vec<PricePoint> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.timestamp);
    sorted
}

/// `None` for an empty series.
pub fn summarize(series: &[PricePoint]) -> Option<SeriesSummary> {
    if series.is_empty() {
        return None;
    }
    let (mut high, mut low, mut sum) = (f64::MIN, f64::MAX, 0.0);
    for p in series {
        high = high.max(p.price_usd);
        low = low.min(p.price_usd);
        sum += p.price_usd;
    }
    Some(SeriesSummary {
        count: series.len(),
        high,
        low,
        average: sum / series.len() as f64,
    })
}
