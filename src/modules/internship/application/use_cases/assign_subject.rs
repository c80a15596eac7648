use async_trait::async_trait;

use crate::internship::application::ports::outgoing::{
    AssignSubjectOutcome, InternshipRepository, InternshipRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignSubjectError {
    /// The internship does not exist or another supervisor already holds
    /// it; the guarded UPDATE matched zero rows either way.
    #[error("Internship not found or already assigned to another supervisor")]
    NotAssignable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAssignSubjectUseCase: Send + Sync {
    async fn execute(
        &self,
        internship_id: i32,
        subject_id: i32,
        supervisor_id: i32,
    ) -> Result<(), AssignSubjectError>;
}

/// Proposed → InProgress. The claim is a compare-and-set on
/// `supervisor_id`, so a supervisor can never steal an internship another
/// supervisor already owns; the second caller's UPDATE matches nothing.
pub struct AssignSubjectUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    repository: R,
}

impl<R> AssignSubjectUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IAssignSubjectUseCase for AssignSubjectUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    async fn execute(
        &self,
        internship_id: i32,
        subject_id: i32,
        supervisor_id: i32,
    ) -> Result<(), AssignSubjectError> {
        match self
            .repository
            .assign_subject(internship_id, subject_id, supervisor_id)
            .await
        {
            Ok(AssignSubjectOutcome::Assigned) => Ok(()),
            Ok(AssignSubjectOutcome::NotAssignable) => Err(AssignSubjectError::NotAssignable),
            Err(InternshipRepositoryError::BrokenReference(what)) => {
                Err(AssignSubjectError::RepositoryError(format!(
                    "Referenced record not found: {what}"
                )))
            }
            Err(e) => Err(AssignSubjectError::RepositoryError(e.to_string())),
        }
    }
}
