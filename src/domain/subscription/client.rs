//! Subscriptions sub-client.

use crate::client::CryptoClient;
use crate::domain::subscription::{is_valid_email, SubscriptionMode, SubscriptionReceipt};
use crate::error::SdkError;

pub struct Subscriptions<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Subscriptions<'a> {
    /// Register `email` for the daily report. Invalid addresses never reach the network.
    pub async fn subscribe(&self, email: &str) -> Result<SubscriptionReceipt, SdkError> {
        self.submit(SubscriptionMode::Subscribe, email).await
    }

    pub async fn unsubscribe(&self, email: &str) -> Result<SubscriptionReceipt, SdkError> {
        self.submit(SubscriptionMode::Unsubscribe, email).await
    }

    pub async fn submit(
        &self,
        mode: SubscriptionMode,
        email: &str,
    ) -> Result<SubscriptionReceipt, SdkError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(SdkError::Validation(format!("invalid email address: {email:?}")));
        }
        let receipt = match mode {
            SubscriptionMode::Subscribe => self.client.http.subscribe(email).await?,
            SubscriptionMode::Unsubscribe => self.client.http.unsubscribe(email).await?,
        };
        Ok(receipt)
    }
}
