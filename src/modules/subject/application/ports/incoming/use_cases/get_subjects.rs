use async_trait::async_trait;

use crate::subject::application::domain::entities::Subject;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubjectsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSubjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Subject>, GetSubjectsError>;
}
