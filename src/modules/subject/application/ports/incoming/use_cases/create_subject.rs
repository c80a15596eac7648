use async_trait::async_trait;

use crate::subject::application::domain::entities::Subject;

#[derive(Debug, Clone)]
pub struct CreateSubjectCommand {
    title: String,
    description: String,
    pdf_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateSubjectCommandError {
    #[error("Title and description are required")]
    MissingField,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,
}

impl CreateSubjectCommand {
    pub fn new(
        title: String,
        description: String,
        pdf_url: Option<String>,
    ) -> Result<Self, CreateSubjectCommandError> {
        let title = title.trim().to_string();
        let description = description.trim().to_string();

        if title.is_empty() || description.is_empty() {
            return Err(CreateSubjectCommandError::MissingField);
        }

        if title.len() > 200 {
            return Err(CreateSubjectCommandError::TitleTooLong);
        }

        Ok(Self {
            title,
            description,
            pdf_url,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pdf_url(&self) -> Option<&String> {
        self.pdf_url.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSubjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSubjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateSubjectCommand) -> Result<Subject, CreateSubjectError>;
}
