use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteStudentError {
    #[error("Student not found")]
    NotFound,

    /// The schema restricts deleting a student that still has internships.
    #[error("Student still has internships on record")]
    HasInternships,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteStudentUseCase: Send + Sync {
    async fn execute(&self, student_id: i32) -> Result<(), DeleteStudentError>;
}
