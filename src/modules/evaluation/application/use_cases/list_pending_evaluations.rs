use async_trait::async_trait;

use crate::evaluation::application::{
    domain::entities::PendingEvaluationItem, ports::outgoing::EvaluationQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListPendingEvaluationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PendingEvaluationItem>, ListPendingError>;
}

pub struct ListPendingEvaluationsUseCase<Q>
where
    Q: EvaluationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPendingEvaluationsUseCase<Q>
where
    Q: EvaluationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListPendingEvaluationsUseCase for ListPendingEvaluationsUseCase<Q>
where
    Q: EvaluationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PendingEvaluationItem>, ListPendingError> {
        self.query
            .list_pending()
            .await
            .map_err(ListPendingError::QueryError)
    }
}
