use async_trait::async_trait;

use crate::student::application::domain::entities::Student;

#[derive(Debug, Clone)]
pub struct CreateStudentData {
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub cin: String,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudentData {
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
pub enum StudentRepositoryError {
    #[error("Student email already registered")]
    EmailTaken,

    #[error("Student CIN already registered")]
    CinTaken,

    #[error("Student not found")]
    NotFound,

    /// Deletion blocked by the internships FK (RESTRICT).
    #[error("Student is referenced by internships")]
    Referenced,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, data: CreateStudentData) -> Result<Student, StudentRepositoryError>;

    async fn update(
        &self,
        student_id: i32,
        data: UpdateStudentData,
    ) -> Result<Student, StudentRepositoryError>;

    async fn delete(&self, student_id: i32) -> Result<(), StudentRepositoryError>;
}

#[async_trait]
pub trait StudentQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, String>;

    async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, String>;
}
