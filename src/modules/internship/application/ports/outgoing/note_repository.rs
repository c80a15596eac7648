use async_trait::async_trait;

use crate::internship::application::domain::entities::InternshipNote;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NoteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Notes are append-only; there is deliberately no update or delete.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn add(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        content: String,
    ) -> Result<InternshipNote, NoteRepositoryError>;

    async fn list_for_internship(
        &self,
        internship_id: i32,
    ) -> Result<Vec<InternshipNote>, NoteRepositoryError>;
}
