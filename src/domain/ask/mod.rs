//! Natural-language query domain — free text in, price rows out.
//!
//! Query semantics are entirely server-defined; the client treats `/ask` as
//! an opaque capability.

pub mod client;
pub mod state;

use crate::domain::price::PricePoint;
use serde::{Deserialize, Serialize};

pub use state::{PendingAsk, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry. User entries carry text; assistant entries carry
/// result rows on success or an apology text on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<PricePoint>>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: Some(text.into()),
            results: None,
        }
    }

    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: Some(text.into()),
            results: None,
        }
    }

    pub fn assistant_results(results: Vec<PricePoint>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: None,
            results: Some(results),
        }
    }
}
