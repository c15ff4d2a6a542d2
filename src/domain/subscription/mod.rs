//! Email subscription domain — daily-report sign-up and removal.

pub mod client;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Permissive address check: something, `@`, something, `.`, something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubscriptionMode {
    #[default]
    Subscribe,
    Unsubscribe,
}

impl SubscriptionMode {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Unsubscribe => "unsubscribe",
        }
    }

    /// Confirmation shown when the server does not send its own message.
    pub fn default_success(&self) -> &'static str {
        match self {
            Self::Subscribe => "Subscription successful",
            Self::Unsubscribe => "Unsubscribed successfully",
        }
    }

    pub fn default_failure(&self) -> &'static str {
        match self {
            Self::Subscribe => "Failed to subscribe",
            Self::Unsubscribe => "Failed to unsubscribe",
        }
    }
}

/// Request body for `/subscribe` and `/unsubscribe`.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
