use async_trait::async_trait;

use crate::student::application::domain::entities::Student;

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentCommand {
    pub student_id: i32,
    pub username: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub cin: Option<String>,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateStudentError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Student not found")]
    NotFound,

    #[error("This email is already registered for a student")]
    EmailTaken,

    #[error("This CIN is already registered for a student")]
    CinTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateStudentUseCase: Send + Sync {
    async fn execute(&self, command: UpdateStudentCommand) -> Result<Student, UpdateStudentError>;
}
