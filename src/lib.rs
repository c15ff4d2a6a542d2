//! # cryptodash
//!
//! A typed Rust client for the crypto price dashboard backend, together with
//! the view-state containers that drive each dashboard page.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, display formatting, domain records and pure analytics
//! 2. **HTTP API** — `CryptoHttp` over a pluggable `Transport`, opt-in retry policies
//! 3. **High-Level Client** — `CryptoClient` with nested sub-clients
//! 4. **Views** — App-owned page containers with fenced, per-panel fetch state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptodash::prelude::*;
//!
//! let client = CryptoClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let latest = client.prices().latest("bitcoin").await?;
//! let history = client.prices().history("bitcoin", 60).await?;
//! println!("{} ({})", format_price(latest.price_usd), format_percent_change(percent_change(&history)));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, request fencing, formatting.
pub mod shared;

/// Domain modules (vertical slices): records, sub-clients, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven client settings.
pub mod config;

/// Console logging for the binary.
#[cfg(feature = "cli")]
pub mod logging;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CryptoClient` — the primary entry point.
pub mod client;

// ── Layer 4: Views ───────────────────────────────────────────────────────────

/// Page containers, panels and the route shell.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, RequestFence, Slot, Ticket, TimeWindow};

    // Formatting
    pub use crate::shared::fmt::{
        format_date, format_date_time, format_percent_change, format_price, format_price_2,
        format_price_4, format_time, format_usd,
    };

    // Domain types
    pub use crate::domain::analytics::{
        time_range_presets, AverageStat, RangeStat, TimeRangePreset, TrendDirection, TrendStat,
        VolatilityStat,
    };
    pub use crate::domain::ask::{ChatMessage, ChatRole, Transcript};
    pub use crate::domain::coin::{CoinInfo, CoinManager, DEFAULT_COINS};
    pub use crate::domain::mover::{TopMover, MOVER_WINDOWS};
    pub use crate::domain::prediction::{Prediction, HORIZONS};
    pub use crate::domain::price::{percent_change, summarize, PricePoint, HISTORY_RANGES};
    pub use crate::domain::subscription::{is_valid_email, SubscriptionMode, SubscriptionReceipt};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network + config
    pub use crate::config::ClientConfig;
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        AnalyticsClient, AskClient, CoinsClient, CryptoClient, CryptoClientBuilder, MoversClient,
        PredictionsClient, PricesClient, SubscriptionsClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::http::{HttpRequest, HttpResponse, Method, RequestBody, Transport};

    // Views
    pub use crate::view::{
        AnalyticsPage, Dashboard, MlInsightsPage, Route, Shell, SubscriptionForm, TopMoversPage,
    };
}
