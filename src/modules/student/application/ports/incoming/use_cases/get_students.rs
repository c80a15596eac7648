use async_trait::async_trait;

use crate::student::application::domain::entities::Student;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStudentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetStudentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Student>, GetStudentsError>;
}
