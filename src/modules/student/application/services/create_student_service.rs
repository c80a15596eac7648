use async_trait::async_trait;

use crate::student::application::{
    domain::entities::Student,
    ports::incoming::use_cases::{CreateStudentCommand, CreateStudentError, CreateStudentUseCase},
    ports::outgoing::{CreateStudentData, StudentRepository, StudentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateStudentUseCase for CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(&self, command: CreateStudentCommand) -> Result<Student, CreateStudentError> {
        self.repository
            .insert(CreateStudentData {
                username: command.username,
                lastname: command.lastname,
                email: command.email,
                cin: command.cin,
                study_level: command.study_level,
                faculty: command.faculty,
                cycle: command.cycle,
                speciality: command.speciality,
            })
            .await
            .map_err(|e| match e {
                StudentRepositoryError::EmailTaken => CreateStudentError::EmailTaken,
                StudentRepositoryError::CinTaken => CreateStudentError::CinTaken,
                other => CreateStudentError::RepositoryError(other.to_string()),
            })
    }
}
