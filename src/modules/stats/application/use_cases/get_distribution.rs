use async_trait::async_trait;

use crate::stats::application::{
    domain::entities::DistributionData, ports::outgoing::StatsQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDistributionError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetDistributionUseCase: Send + Sync {
    async fn execute(&self) -> Result<DistributionData, GetDistributionError>;
}

pub struct GetDistributionUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetDistributionUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetDistributionUseCase for GetDistributionUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DistributionData, GetDistributionError> {
        self.query
            .distribution()
            .await
            .map_err(GetDistributionError::QueryError)
    }
}
