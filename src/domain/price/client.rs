//! Prices sub-client — latest, history, point-in-time lookups.

use crate::client::CryptoClient;
use crate::domain::price::PricePoint;
use crate::error::SdkError;

use chrono::{DateTime, Utc};

pub struct Prices<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Prices<'a> {
    /// Most recent observation for `coin_id`.
    pub async fn latest(&self, coin_id: &str) -> Result<PricePoint, SdkError> {
        Ok(self.client.http.get_latest_price(coin_id).await?)
    }

    /// Observations over the last `minutes`, in server order.
    pub async fn history(&self, coin_id: &str, minutes: u32) -> Result<Vec<PricePoint>, SdkError> {
        Ok(self.client.http.get_price_history(coin_id, minutes).await?)
    }

    /// Observation nearest to `timestamp` (resolution is server-defined).
    pub async fn at(
        &self,
        coin_id: &str,
        timestamp: &DateTime<Utc>,
    ) -> Result<PricePoint, SdkError> {
        Ok(self.client.http.get_price_at(coin_id, timestamp).await?)
    }
}
