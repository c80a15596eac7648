use async_trait::async_trait;

use crate::stats::application::domain::entities::{DistributionData, KpiData};

#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn kpis(&self) -> Result<KpiData, String>;

    async fn distribution(&self) -> Result<DistributionData, String>;
}
