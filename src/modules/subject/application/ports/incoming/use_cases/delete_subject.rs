use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSubjectError {
    #[error("Subject not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSubjectUseCase: Send + Sync {
    async fn execute(&self, subject_id: i32) -> Result<(), DeleteSubjectError>;
}
