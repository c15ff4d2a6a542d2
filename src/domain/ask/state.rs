//! Chat transcript state — app-owned, SDK-provided update logic.

use super::ChatMessage;
use crate::client::CryptoClient;
use crate::domain::price::PricePoint;
use crate::error::SdkError;

/// Text appended when a query fails.
pub const ASK_FAILED: &str = "Sorry, I could not process that request.";

/// An accepted question waiting for its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsk {
    pub question: String,
}

/// In-memory log of a natural-language query session.
///
/// Questions are appended as soon as they are submitted; each answer
/// (or apology) is appended when its request completes. Nothing is ever
/// removed except by [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    draft: String,
    in_flight: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submit the current draft.
    pub fn submit_draft(&mut self) -> Option<PendingAsk> {
        let draft = self.draft.clone();
        self.begin_ask(&draft)
    }

    /// Accept `question`; blank input is ignored.
    pub fn begin_ask(&mut self, question: &str) -> Option<PendingAsk> {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.in_flight += 1;
        Some(PendingAsk {
            question: trimmed.to_string(),
        })
    }

    pub fn finish_ask(&mut self, _pending: PendingAsk, result: Result<Vec<PricePoint>, SdkError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(rows) => {
                self.messages.push(ChatMessage::assistant_results(rows));
                self.draft.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ask request failed");
                self.messages.push(ChatMessage::assistant_text(ASK_FAILED));
            }
        }
    }

    /// Ask `question` and record both sides of the exchange. Single attempt.
    pub async fn ask(&mut self, client: &CryptoClient, question: &str) {
        let Some(pending) = self.begin_ask(question) else {
            return;
        };
        let result = client.ask().question(&pending.question).await;
        self.finish_ask(pending, result);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
