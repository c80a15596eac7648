use async_trait::async_trait;

use crate::subject::application::domain::entities::Subject;

#[derive(Debug, Clone)]
pub struct CreateSubjectData {
    pub title: String,
    pub description: String,
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSubjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubjectRepositoryError {
    #[error("Subject not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn insert(&self, data: CreateSubjectData) -> Result<Subject, SubjectRepositoryError>;

    async fn update(
        &self,
        subject_id: i32,
        data: UpdateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError>;

    async fn delete(&self, subject_id: i32) -> Result<(), SubjectRepositoryError>;
}

#[async_trait]
pub trait SubjectQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Subject>, String>;
}
