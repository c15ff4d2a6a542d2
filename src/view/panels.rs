//! Presentational panels — pure view models built from already-fetched data.
//!
//! Every builder takes immutable snapshots and returns a value that renders
//! itself as plain text through `Display`. Builders suffixed `_in` take an
//! explicit timezone; the plain variants use the local one.

use crate::domain::analytics::{AverageStat, RangeStat, TrendDirection, TrendStat, VolatilityStat};
use crate::domain::ask::{ChatMessage, ChatRole};
use crate::domain::mover::TopMover;
use crate::domain::prediction::Prediction;
use crate::domain::price::{percent_change, sort_chronological, summarize, PricePoint};
use crate::shared::fmt::{
    format_date_time_in, format_percent_change, format_price, format_price_2, format_price_4,
    format_time_in,
};

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

const NOT_AVAILABLE: &str = "N/A";

// ─── Price card ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub title: String,
    /// Formatted latest price, or `Loading...` before the first response.
    pub price: String,
    pub change_percent: f64,
    pub change: String,
    pub direction: TrendDirection,
    pub last_updated: String,
}

impl PriceCard {
    pub fn build(coin_name: &str, latest: Option<&PricePoint>, history: &[PricePoint]) -> Self {
        Self::build_in(coin_name, latest, history, &Local)
    }

    pub fn build_in<Tz>(
        coin_name: &str,
        latest: Option<&PricePoint>,
        history: &[PricePoint],
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let change = percent_change(history);
        Self {
            title: format!("{coin_name} Price"),
            price: latest
                .map(|p| format_price(p.price_usd))
                .unwrap_or_else(|| "Loading...".to_string()),
            change_percent: change,
            change: format_percent_change(change),
            direction: TrendDirection::from_change(change),
            last_updated: format!(
                "Last updated: {}",
                latest
                    .map(|p| format_time_in(&p.timestamp, tz))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            ),
        }
    }
}

impl fmt::Display for PriceCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", self.title, self.change)?;
        writeln!(f, "  {}", self.price)?;
        write!(f, "  {}", self.last_updated)
    }
}

// ─── Chart card ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub time: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Loading,
    Empty,
    Series {
        /// Ascending by timestamp.
        points: Vec<ChartPoint>,
        /// Padded y-axis bounds `(min, max)`.
        y_domain: (f64, f64),
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartCard {
    pub color: &'static str,
    pub body: ChartBody,
}

/// Y-axis bounds padded by 5% of the spread, or 0.1% of the minimum for a flat series.
pub fn y_domain(prices: &[f64]) -> Option<(f64, f64)> {
    if prices.is_empty() {
        return None;
    }
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut padding = (max - min) * 0.05;
    if padding == 0.0 {
        padding = min * 0.001;
    }
    Some((min - padding, max + padding))
}

impl ChartCard {
    pub fn build(history: &[PricePoint], loading: bool, color: &'static str) -> Self {
        Self::build_in(history, loading, color, &Local)
    }

    pub fn build_in<Tz>(history: &[PricePoint], loading: bool, color: &'static str, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let body = if loading {
            ChartBody::Loading
        } else if history.is_empty() {
            ChartBody::Empty
        } else {
            let points: Vec<ChartPoint> = sort_chronological(history)
                .into_iter()
                .map(|p| ChartPoint {
                    time: format_time_in(&p.timestamp, tz),
                    timestamp: p.timestamp,
                    price: p.price_usd,
                })
                .collect();
            let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
            let y_domain = y_domain(&prices).unwrap_or((0.0, 0.0));
            ChartBody::Series { points, y_domain }
        };
        Self { color, body }
    }

    pub fn points(&self) -> &[ChartPoint] {
        match &self.body {
            ChartBody::Series { points, .. } => points,
            _ => &[],
        }
    }
}

impl fmt::Display for ChartCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Price History")?;
        match &self.body {
            ChartBody::Loading => write!(f, "  Loading chart data..."),
            ChartBody::Empty => write!(f, "  No price data available"),
            ChartBody::Series { points, y_domain } => {
                writeln!(
                    f,
                    "  {} points, axis {} – {}",
                    points.len(),
                    format_price_2(y_domain.0),
                    format_price_2(y_domain.1)
                )?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  {:>12}  {}", p.time, format_price(p.price))?;
                }
                Ok(())
            }
        }
    }
}

// ─── Stats card ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub count: usize,
    pub high: String,
    pub low: String,
    pub average: String,
}

impl StatsCard {
    pub fn build(history: &[PricePoint]) -> Self {
        match summarize(history) {
            Some(s) => Self {
                count: s.count,
                high: format_price(s.high),
                low: format_price(s.low),
                average: format_price(s.average),
            },
            None => Self {
                count: 0,
                high: NOT_AVAILABLE.to_string(),
                low: NOT_AVAILABLE.to_string(),
                average: NOT_AVAILABLE.to_string(),
            },
        }
    }
}

impl fmt::Display for StatsCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics ({} data points)", self.count)?;
        writeln!(f, "  High:    {}", self.high)?;
        writeln!(f, "  Low:     {}", self.low)?;
        write!(f, "  Average: {}", self.average)
    }
}

// ─── Analytics cards ─────────────────────────────────────────────────────────

/// Label/value rows under a heading; used for the aggregate cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl StatCard {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: &str, value: impl Into<String>) -> Self {
        self.rows.push((label.to_string(), value.into()));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn average(stat: &AverageStat) -> Self {
        Self::new("Average Price")
            .row("Average", format_price(stat.average))
            .row("Data points", stat.data_points.to_string())
    }

    pub fn range(stat: &RangeStat) -> Self {
        Self::new("Price Range")
            .row("Min", format_price(stat.min))
            .row("Max", format_price(stat.max))
            .row("Spread", format_price(stat.max - stat.min))
    }

    pub fn volatility(stat: &VolatilityStat) -> Self {
        let relative = if stat.mean_price != 0.0 {
            format!("{:.2}%", stat.stddev_price / stat.mean_price * 100.0)
        } else {
            NOT_AVAILABLE.to_string()
        };
        Self::new("Volatility Index")
            .row("Std deviation", format_price_4(stat.stddev_price))
            .row("Mean", format_price(stat.mean_price))
            .row("Relative", relative)
            .row("Data points", stat.data_points.to_string())
    }

    pub fn trend(stat: &TrendStat) -> Self {
        Self::new("Trend Signal")
            .row("Trend", stat.trend.clone())
            .row("Direction", stat.direction().as_str())
            .row("Slope", format!("{:.6}", stat.slope))
            .row("Data points", stat.data_points.to_string())
    }

    pub fn price_at<Tz>(point: &PricePoint, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self::new("Price at Time")
            .row("Price", format_price(point.price_usd))
            .row("Timestamp", format_date_time_in(&point.timestamp, tz))
    }

    pub fn prediction<Tz>(prediction: &Prediction, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self::new("ML Price Prediction")
            .row("Predicted", format_price_2(prediction.predicted_price))
            .row(
                "Range",
                format!(
                    "{} – {}",
                    format_price_2(prediction.price_low),
                    format_price_2(prediction.price_high)
                ),
            )
            .row("Trend", prediction.trend.clone())
            .row(
                "By",
                format!(
                    "{} · {} points",
                    format_date_time_in(&prediction.horizon_end_time, tz),
                    prediction.data_points
                ),
            )
    }
}

impl fmt::Display for StatCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for (label, value) in &self.rows {
            write!(f, "\n  {label}: {value}")?;
        }
        Ok(())
    }
}

// ─── Top movers ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct MoverRow {
    pub rank: String,
    pub coin: String,
    pub start_price: String,
    pub end_price: String,
    pub change: String,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoverList {
    pub title: String,
    pub rows: Vec<MoverRow>,
    /// Shown instead of rows when the list is empty.
    pub empty_text: &'static str,
}

impl MoverList {
    /// Rows in server order, truncated to `limit` when given.
    pub fn build(title: &str, movers: &[TopMover], limit: Option<usize>) -> Self {
        let take = limit.unwrap_or(movers.len());
        let rows = movers
            .iter()
            .take(take)
            .enumerate()
            .map(|(i, m)| MoverRow {
                rank: format!("#{}", i + 1),
                coin: m.coin_id.as_str().to_uppercase(),
                start_price: format_price_4(m.start_price),
                end_price: format_price_4(m.end_price),
                change: format_percent_change(m.percent_change),
                direction: m.direction(),
            })
            .collect();
        Self {
            title: title.to_string(),
            rows,
            empty_text: "No movers data for this window.",
        }
    }
}

impl fmt::Display for MoverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.rows.is_empty() {
            return write!(f, "\n  {}", self.empty_text);
        }
        for r in &self.rows {
            write!(
                f,
                "\n  {:<4} {:<12} {:>16} → {:<16} {}",
                r.rank, r.coin, r.start_price, r.end_price, r.change
            )?;
        }
        Ok(())
    }
}

// ─── Chat transcript ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptView {
    pub lines: Vec<String>,
}

impl TranscriptView {
    pub fn build<Tz>(messages: &[ChatMessage], tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut lines = Vec::new();
        for m in messages {
            let who = match m.role {
                ChatRole::User => "You",
                ChatRole::Assistant => "AI",
            };
            if let Some(text) = &m.text {
                lines.push(format!("{who}: {text}"));
            }
            if let Some(rows) = &m.results {
                if rows.is_empty() {
                    lines.push(format!("{who}: No results"));
                }
                for p in rows {
                    lines.push(format!(
                        "{who}: {} {} {}",
                        p.coin_id,
                        format_date_time_in(&p.timestamp, tz),
                        format_price(p.price_usd)
                    ));
                }
            }
        }
        Self { lines }
    }
}

impl fmt::Display for TranscriptView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AI Query")?;
        for line in &self.lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}
