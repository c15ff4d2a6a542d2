//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fence;
pub mod fmt;
pub mod serde_util;
pub mod slot;

pub use fence::{RequestFence, Ticket};
pub use slot::Slot;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (lowercase, e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CoinId {
    fn default() -> Self {
        Self(DEFAULT_COIN.to_string())
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl AsRef<str> for CoinId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

/// Coin selected when a page first mounts.
pub const DEFAULT_COIN: &str = "bitcoin";

// ─── TimeWindow ──────────────────────────────────────────────────────────────

/// Half-open interval `[start, end)` scoping an aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window ending at `end` and reaching back `lookback`.
    pub fn ending_at(end: DateTime<Utc>, lookback: chrono::Duration) -> Self {
        Self {
            start: end - lookback,
            end,
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// `true` if `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant < self.end
    }

    pub fn start_iso(&self) -> String {
        to_iso8601(&self.start)
    }

    pub fn end_iso(&self) -> String {
        to_iso8601(&self.end)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start_iso(), self.end_iso())
    }
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix
/// (e.g. `2024-01-15T12:00:00.000Z`).
pub fn to_iso8601(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
