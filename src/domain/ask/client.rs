//! Ask sub-client.

use crate::client::CryptoClient;
use crate::domain::price::PricePoint;
use crate::error::SdkError;

pub struct Ask<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Ask<'a> {
    /// Send a free-text question; the server answers with matching rows.
    pub async fn question(&self, question: &str) -> Result<Vec<PricePoint>, SdkError> {
        Ok(self.client.http.ask(question).await?)
    }
}
