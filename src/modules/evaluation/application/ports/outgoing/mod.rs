use async_trait::async_trait;

use crate::evaluation::application::domain::entities::{EvaluationRatings, PendingEvaluationItem};
use crate::internship::application::domain::status::InternshipStatus;

/// What the supervisor submits.
#[derive(Debug, Clone)]
pub enum SubmitAction {
    /// Full evaluation; moves the internship to Finished.
    Validate {
        ratings: EvaluationRatings,
        comments: Option<String>,
    },
    /// Clears the evaluation; moves the internship to Refused.
    Unvalidate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// Existing or freshly inserted row id. `None` only for an unvalidate
    /// with no prior evaluation row.
    pub evaluation_id: Option<i32>,
    pub new_status: InternshipStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EvaluationRepositoryError {
    #[error("Evaluation not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Both methods are single transactions in the implementation: the
/// evaluation write and the internship status write commit or roll back
/// together. Partial application must never be observable.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Upsert keyed on (internship_id, supervisor_id): an existing row is
    /// updated in place, preserving its id; otherwise one is inserted.
    async fn submit(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        action: SubmitAction,
    ) -> Result<SubmitOutcome, EvaluationRepositoryError>;

    /// Department-head counter-validation: stamps or clears
    /// `validated_by`/`validated_at` and moves the internship to
    /// Validated/Rejected atomically.
    async fn counter_validate(
        &self,
        evaluation_id: i32,
        chef_id: i32,
        approve: bool,
    ) -> Result<InternshipStatus, EvaluationRepositoryError>;
}

#[async_trait]
pub trait EvaluationQuery: Send + Sync {
    /// Evaluations still waiting for counter-validation.
    async fn list_pending(&self) -> Result<Vec<PendingEvaluationItem>, String>;
}
