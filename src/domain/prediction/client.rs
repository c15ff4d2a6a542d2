//! Predictions sub-client.

use crate::client::CryptoClient;
use crate::domain::prediction::Prediction;
use crate::error::SdkError;

pub struct Predictions<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Predictions<'a> {
    /// Forecast `horizon_minutes` ahead. `lookback_minutes` bounds the
    /// history the server regresses over; `None` uses the server default.
    pub async fn predict(
        &self,
        coin_id: &str,
        horizon_minutes: u32,
        lookback_minutes: Option<u32>,
    ) -> Result<Prediction, SdkError> {
        Ok(self
            .client
            .http
            .get_prediction(coin_id, horizon_minutes, lookback_minutes)
            .await?)
    }
}
