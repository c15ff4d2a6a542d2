//! Analytics sub-client — windowed aggregates.

use crate::client::CryptoClient;
use crate::domain::analytics::{AverageStat, RangeStat, TrendStat, VolatilityStat};
use crate::error::SdkError;
use crate::shared::TimeWindow;

pub struct Analytics<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Analytics<'a> {
    pub async fn average(&self, coin_id: &str, window: &TimeWindow) -> Result<AverageStat, SdkError> {
        Ok(self.client.http.get_average(coin_id, window).await?)
    }

    pub async fn range(&self, coin_id: &str, window: &TimeWindow) -> Result<RangeStat, SdkError> {
        Ok(self.client.http.get_range(coin_id, window).await?)
    }

    pub async fn volatility(
        &self,
        coin_id: &str,
        window: &TimeWindow,
    ) -> Result<VolatilityStat, SdkError> {
        Ok(self.client.http.get_volatility(coin_id, window).await?)
    }

    pub async fn trend(&self, coin_id: &str, window: &TimeWindow) -> Result<TrendStat, SdkError> {
        Ok(self.client.http.get_trend(coin_id, window).await?)
    }
}
