use async_trait::async_trait;

use crate::internship::application::{
    domain::entities::InternshipNote,
    ports::outgoing::{InternshipQuery, NoteRepository},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NoteError {
    #[error("Note content is required")]
    EmptyContent,

    /// Covers both "no such internship" and "not yours": a supervisor
    /// learns nothing about internships outside their portfolio.
    #[error("You are not assigned to this internship or it does not exist")]
    NotAssigned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAddNoteUseCase: Send + Sync {
    async fn execute(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        content: String,
    ) -> Result<InternshipNote, NoteError>;
}

#[async_trait]
pub trait IGetNotesUseCase: Send + Sync {
    async fn execute(
        &self,
        internship_id: i32,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipNote>, NoteError>;
}

pub struct InternshipNotesUseCase<R, Q>
where
    R: NoteRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    notes: R,
    query: Q,
}

impl<R, Q> InternshipNotesUseCase<R, Q>
where
    R: NoteRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(notes: R, query: Q) -> Self {
        Self { notes, query }
    }

    async fn check_ownership(
        &self,
        internship_id: i32,
        supervisor_id: i32,
    ) -> Result<(), NoteError> {
        let owned = self
            .query
            .is_assigned_to(internship_id, supervisor_id)
            .await
            .map_err(NoteError::RepositoryError)?;

        if !owned {
            return Err(NoteError::NotAssigned);
        }
        Ok(())
    }
}

#[async_trait]
impl<R, Q> IAddNoteUseCase for InternshipNotesUseCase<R, Q>
where
    R: NoteRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        content: String,
    ) -> Result<InternshipNote, NoteError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(NoteError::EmptyContent);
        }

        self.check_ownership(internship_id, supervisor_id).await?;

        self.notes
            .add(internship_id, supervisor_id, content)
            .await
            .map_err(|e| NoteError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> IGetNotesUseCase for InternshipNotesUseCase<R, Q>
where
    R: NoteRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        internship_id: i32,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipNote>, NoteError> {
        self.check_ownership(internship_id, supervisor_id).await?;

        self.notes
            .list_for_internship(internship_id)
            .await
            .map_err(|e| NoteError::RepositoryError(e.to_string()))
    }
}
