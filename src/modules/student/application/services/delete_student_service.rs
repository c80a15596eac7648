use async_trait::async_trait;

use crate::student::application::{
    ports::incoming::use_cases::{DeleteStudentError, DeleteStudentUseCase},
    ports::outgoing::{StudentRepository, StudentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteStudentUseCase for DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(&self, student_id: i32) -> Result<(), DeleteStudentError> {
        self.repository
            .delete(student_id)
            .await
            .map_err(|e| match e {
                StudentRepositoryError::NotFound => DeleteStudentError::NotFound,
                StudentRepositoryError::Referenced => DeleteStudentError::HasInternships,
                other => DeleteStudentError::RepositoryError(other.to_string()),
            })
    }
}
