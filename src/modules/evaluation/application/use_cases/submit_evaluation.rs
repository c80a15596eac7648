use async_trait::async_trait;
use serde::Serialize;

use crate::evaluation::application::{
    domain::entities::{EvaluationRatings, RatingsError},
    ports::outgoing::{EvaluationRepository, SubmitAction, SubmitOutcome},
};
use crate::internship::application::{
    domain::status::InternshipStatus, ports::outgoing::InternshipQuery,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw supervisor submission, as received from the wire.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationCommand {
    pub internship_id: i32,
    pub supervisor_id: i32,
    /// "validate" or "unvalidate".
    pub action_type: String,
    pub discipline: Option<String>,
    pub interest: Option<String>,
    pub presence: Option<String>,
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitEvaluationResult {
    pub evaluation_id: Option<i32>,
    pub status: InternshipStatus,
    pub missed_days: Option<i32>,
    pub discipline: Option<String>,
    pub interest: Option<String>,
    pub presence: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitEvaluationError {
    #[error("Invalid actionType provided")]
    BadAction,

    #[error("{0}")]
    InvalidRatings(String),

    #[error("You are not assigned to this internship or it does not exist")]
    NotAssigned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISubmitEvaluationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitEvaluationCommand,
    ) -> Result<SubmitEvaluationResult, SubmitEvaluationError>;
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

/// Supervisor evaluation submission. Idempotent per
/// (internship, supervisor): a repeat submission updates the same row.
/// The ownership gate runs before any write.
pub struct SubmitEvaluationUseCase<R, Q>
where
    R: EvaluationRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    repository: R,
    internships: Q,
}

impl<R, Q> SubmitEvaluationUseCase<R, Q>
where
    R: EvaluationRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(repository: R, internships: Q) -> Self {
        Self {
            repository,
            internships,
        }
    }
}

#[async_trait]
impl<R, Q> ISubmitEvaluationUseCase for SubmitEvaluationUseCase<R, Q>
where
    R: EvaluationRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitEvaluationCommand,
    ) -> Result<SubmitEvaluationResult, SubmitEvaluationError> {
        let action = match command.action_type.as_str() {
            "validate" => {
                let ratings = EvaluationRatings::new(
                    command.discipline.as_deref(),
                    command.interest.as_deref(),
                    command.presence.as_deref(),
                    command.missed_days,
                )
                .map_err(|e: RatingsError| SubmitEvaluationError::InvalidRatings(e.to_string()))?;

                SubmitAction::Validate {
                    ratings,
                    comments: command
                        .comments
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty()),
                }
            }
            "unvalidate" => SubmitAction::Unvalidate,
            _ => return Err(SubmitEvaluationError::BadAction),
        };

        let owned = self
            .internships
            .is_assigned_to(command.internship_id, command.supervisor_id)
            .await
            .map_err(SubmitEvaluationError::RepositoryError)?;

        if !owned {
            return Err(SubmitEvaluationError::NotAssigned);
        }

        let echo = match &action {
            SubmitAction::Validate { ratings, .. } => Some(ratings.clone()),
            SubmitAction::Unvalidate => None,
        };

        let SubmitOutcome {
            evaluation_id,
            new_status,
        } = self
            .repository
            .submit(command.internship_id, command.supervisor_id, action)
            .await
            .map_err(|e| SubmitEvaluationError::RepositoryError(e.to_string()))?;

        Ok(SubmitEvaluationResult {
            evaluation_id,
            status: new_status,
            missed_days: echo.as_ref().and_then(|r| r.missed_days),
            discipline: echo.as_ref().map(|r| r.discipline.to_string()),
            interest: echo.as_ref().map(|r| r.interest.to_string()),
            presence: echo.as_ref().map(|r| r.presence.to_string()),
        })
    }
}
