use async_trait::async_trait;
use email_address::EmailAddress;

use crate::student::application::{
    domain::entities::Student,
    ports::incoming::use_cases::{UpdateStudentCommand, UpdateStudentError, UpdateStudentUseCase},
    ports::outgoing::{StudentRepository, StudentRepositoryError, UpdateStudentData},
};

#[derive(Debug, Clone)]
pub struct UpdateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateStudentUseCase for UpdateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateStudentCommand) -> Result<Student, UpdateStudentError> {
        let UpdateStudentCommand {
            student_id,
            username,
            lastname,
            email,
            cin,
            study_level,
            faculty,
            cycle,
            speciality,
        } = command;

        if username.is_none()
            && lastname.is_none()
            && email.is_none()
            && cin.is_none()
            && study_level.is_none()
            && faculty.is_none()
            && cycle.is_none()
            && speciality.is_none()
        {
            return Err(UpdateStudentError::EmptyUpdate);
        }

        let email = match email {
            Some(e) => {
                let e = e.trim().to_lowercase();
                if !EmailAddress::is_valid(&e) {
                    return Err(UpdateStudentError::InvalidEmailFormat);
                }
                Some(e)
            }
            None => None,
        };

        self.repository
            .update(
                student_id,
                UpdateStudentData {
                    username,
                    lastname,
                    email,
                    cin,
                    study_level,
                    faculty,
                    cycle,
                    speciality,
                },
            )
            .await
            .map_err(|e| match e {
                StudentRepositoryError::NotFound => UpdateStudentError::NotFound,
                StudentRepositoryError::EmailTaken => UpdateStudentError::EmailTaken,
                StudentRepositoryError::CinTaken => UpdateStudentError::CinTaken,
                other => UpdateStudentError::RepositoryError(other.to_string()),
            })
    }
}
