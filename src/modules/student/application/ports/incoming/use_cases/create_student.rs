use async_trait::async_trait;
use email_address::EmailAddress;

use crate::student::application::domain::entities::Student;

//
// ──────────────────────────────────────────────────────────
// Create Student Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateStudentCommand {
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub cin: String,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateStudentCommandError {
    #[error("Username, last name, email, and CIN are required")]
    MissingField,

    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl CreateStudentCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        username: String,
        lastname: String,
        email: String,
        cin: String,
        study_level: Option<String>,
        faculty: Option<String>,
        cycle: Option<String>,
        speciality: Option<String>,
    ) -> Result<Self, CreateStudentCommandError> {
        let username = username.trim().to_string();
        let lastname = lastname.trim().to_string();
        let email = email.trim().to_lowercase();
        let cin = cin.trim().to_string();

        if username.is_empty() || lastname.is_empty() || email.is_empty() || cin.is_empty() {
            return Err(CreateStudentCommandError::MissingField);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(CreateStudentCommandError::InvalidEmailFormat);
        }

        Ok(Self {
            username,
            lastname,
            email,
            cin,
            study_level,
            faculty,
            cycle,
            speciality,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateStudentError {
    #[error("This email is already registered for a student")]
    EmailTaken,

    #[error("This CIN is already registered for a student")]
    CinTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateStudentUseCase: Send + Sync {
    async fn execute(&self, command: CreateStudentCommand) -> Result<Student, CreateStudentError>;
}
