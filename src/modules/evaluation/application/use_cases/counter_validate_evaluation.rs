use async_trait::async_trait;
use serde::Serialize;

use crate::evaluation::application::ports::outgoing::{
    EvaluationRepository, EvaluationRepositoryError,
};
use crate::internship::application::domain::status::InternshipStatus;

#[derive(Debug, Clone, Serialize)]
pub struct CounterValidationResult {
    pub evaluation_id: i32,
    pub status: InternshipStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CounterValidateError {
    #[error("Missing or invalid action type")]
    BadAction,

    #[error("Evaluation not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICounterValidateUseCase: Send + Sync {
    async fn execute(
        &self,
        evaluation_id: i32,
        chef_id: i32,
        action_type: &str,
    ) -> Result<CounterValidationResult, CounterValidateError>;
}

/// Department-head counter-validation. The repository runs the evaluation
/// stamp and the status flip as one transaction; this layer only maps the
/// action word and the errors.
pub struct CounterValidateUseCase<R>
where
    R: EvaluationRepository + Send + Sync,
{
    repository: R,
}

impl<R> CounterValidateUseCase<R>
where
    R: EvaluationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICounterValidateUseCase for CounterValidateUseCase<R>
where
    R: EvaluationRepository + Send + Sync,
{
    async fn execute(
        &self,
        evaluation_id: i32,
        chef_id: i32,
        action_type: &str,
    ) -> Result<CounterValidationResult, CounterValidateError> {
        let approve = match action_type {
            "validate" => true,
            "reject" => false,
            _ => return Err(CounterValidateError::BadAction),
        };

        let status = self
            .repository
            .counter_validate(evaluation_id, chef_id, approve)
            .await
            .map_err(|e| match e {
                EvaluationRepositoryError::NotFound => CounterValidateError::NotFound,
                other => CounterValidateError::RepositoryError(other.to_string()),
            })?;

        Ok(CounterValidationResult {
            evaluation_id,
            status,
        })
    }
}
