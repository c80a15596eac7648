use async_trait::async_trait;

use crate::subject::application::domain::entities::Subject;

/// Partial update. `pdf_url` is how the uploaded topic sheet gets
/// attached after the fact.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubjectCommand {
    pub subject_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSubjectError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Subject not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSubjectUseCase: Send + Sync {
    async fn execute(&self, command: UpdateSubjectCommand) -> Result<Subject, UpdateSubjectError>;
}
