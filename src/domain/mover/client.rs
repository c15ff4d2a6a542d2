//! Movers sub-client.

use crate::client::CryptoClient;
use crate::domain::mover::TopMover;
use crate::error::SdkError;

pub struct Movers<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Movers<'a> {
    /// Coins ranked by change over the last `minutes`, in server order.
    pub async fn top(&self, minutes: u32) -> Result<Vec<TopMover>, SdkError> {
        Ok(self.client.http.get_top_movers(minutes).await?)
    }
}
