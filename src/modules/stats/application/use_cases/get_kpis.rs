use async_trait::async_trait;

use crate::stats::application::{domain::entities::KpiData, ports::outgoing::StatsQuery};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetKpisError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetKpisUseCase: Send + Sync {
    async fn execute(&self) -> Result<KpiData, GetKpisError>;
}

pub struct GetKpisUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetKpisUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetKpisUseCase for GetKpisUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<KpiData, GetKpisError> {
        self.query.kpis().await.map_err(GetKpisError::QueryError)
    }
}
