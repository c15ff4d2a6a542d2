//! Coins sub-client.

use crate::client::CryptoClient;
use crate::error::SdkError;

pub struct Coins<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Coins<'a> {
    /// Coin ids the backend has data for.
    pub async fn available(&self) -> Result<Vec<String>, SdkError> {
        Ok(self.client.http.get_available_coins().await?)
    }
}
