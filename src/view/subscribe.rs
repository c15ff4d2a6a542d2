//! Daily report sign-up form.

use crate::client::CryptoClient;
use crate::domain::subscription::{is_valid_email, SubscriptionMode, SubscriptionReceipt};
use crate::error::SdkError;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// An accepted, validated submission waiting for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub mode: SubscriptionMode,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionForm {
    email: String,
    in_flight: Option<SubscriptionMode>,
    message: Option<String>,
    error: Option<String>,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Validate the input. Returns `None`, with the error set, when the
    /// address is rejected; nothing should be sent in that case.
    pub fn begin_submit(&mut self, mode: SubscriptionMode) -> Option<PendingSubmit> {
        self.message = None;
        self.error = None;

        let email = self.email.trim();
        if !is_valid_email(email) {
            self.error = Some(INVALID_EMAIL.to_string());
            return None;
        }
        self.in_flight = Some(mode);
        Some(PendingSubmit {
            mode,
            email: email.to_string(),
        })
    }

    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit,
        result: Result<SubscriptionReceipt, SdkError>,
    ) {
        self.in_flight = None;
        match result {
            Ok(receipt) => {
                let message = receipt
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| pending.mode.default_success().to_string());
                self.message = Some(message);
                self.email.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = pending.mode.path(), "Subscription request failed");
                self.error = Some(
                    e.server_message()
                        .unwrap_or_else(|| pending.mode.default_failure().to_string()),
                );
            }
        }
    }

    pub async fn submit(&mut self, client: &CryptoClient, mode: SubscriptionMode) {
        let Some(pending) = self.begin_submit(mode) else {
            return;
        };
        let result = client.subscriptions().submit(pending.mode, &pending.email).await;
        self.finish_submit(pending, result);
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Caption for the `mode` button; it reads as in progress only while
    /// that mode's request is in flight.
    pub fn button_label(&self, mode: SubscriptionMode) -> &'static str {
        let busy = self.in_flight == Some(mode);
        match (mode, busy) {
            (SubscriptionMode::Subscribe, false) => "Subscribe",
            (SubscriptionMode::Subscribe, true) => "Subscribing…",
            (SubscriptionMode::Unsubscribe, false) => "Unsubscribe",
            (SubscriptionMode::Unsubscribe, true) => "Unsubscribing…",
        }
    }
}
