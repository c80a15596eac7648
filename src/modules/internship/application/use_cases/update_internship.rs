use async_trait::async_trait;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::internship::application::{
    domain::{entities::Internship, status::InternshipStatus},
    ports::outgoing::{InternshipQuery, InternshipRepository, InternshipRepositoryError,
        UpdateInternshipData},
};

/// Manager edit of an internship row. Every field is optional; a status
/// change must follow the central transition table.
#[derive(Debug, Clone, Default)]
pub struct UpdateInternshipCommand {
    pub internship_id: i32,
    pub internship_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub is_paid: Option<bool>,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateInternshipError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Date format must be YYYY-MM-DD")]
    BadDate,

    #[error("{0}")]
    BadStatus(String),

    #[error("Illegal status transition from {from} to {to}")]
    IllegalTransition {
        from: InternshipStatus,
        to: InternshipStatus,
    },

    #[error("Internship not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateInternshipUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateInternshipCommand,
    ) -> Result<Internship, UpdateInternshipError>;
}

pub struct UpdateInternshipUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateInternshipUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> IUpdateInternshipUseCase for UpdateInternshipUseCase<R, Q>
where
    R: InternshipRepository + Send + Sync,
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateInternshipCommand,
    ) -> Result<Internship, UpdateInternshipError> {
        let UpdateInternshipCommand {
            internship_id,
            internship_type,
            start_date,
            end_date,
            status,
            is_paid,
            stipend_amount,
            supervisor_id,
            academic_supervisor_id,
        } = command;

        if internship_type.is_none()
            && start_date.is_none()
            && end_date.is_none()
            && status.is_none()
            && is_paid.is_none()
            && stipend_amount.is_none()
            && supervisor_id.is_none()
            && academic_supervisor_id.is_none()
        {
            return Err(UpdateInternshipError::EmptyUpdate);
        }

        let parse_date = |raw: Option<String>| -> Result<Option<NaiveDate>, UpdateInternshipError> {
            raw.map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|_| UpdateInternshipError::BadDate)
            })
            .transpose()
        };
        let start_date = parse_date(start_date)?;
        let end_date = parse_date(end_date)?;

        let status = match status {
            Some(raw) => {
                let next = InternshipStatus::from_str(&raw)
                    .map_err(|e| UpdateInternshipError::BadStatus(e.to_string()))?;

                let current = self
                    .query
                    .find_by_id(internship_id)
                    .await
                    .map_err(UpdateInternshipError::RepositoryError)?
                    .ok_or(UpdateInternshipError::NotFound)?
                    .status;

                // A no-op write of the current status is tolerated; anything
                // else must be a legal transition.
                if next != current && !current.can_transition_to(next) {
                    return Err(UpdateInternshipError::IllegalTransition {
                        from: current,
                        to: next,
                    });
                }
                Some(next)
            }
            None => None,
        };

        // Turning pay off zeroes the stipend, as the legacy edit screen did.
        let stipend_amount = match (is_paid, stipend_amount) {
            (Some(false), _) => Some(None),
            (_, Some(amount)) => Some(Some(amount)),
            _ => None,
        };

        self.repository
            .update(
                internship_id,
                UpdateInternshipData {
                    internship_type,
                    start_date,
                    end_date,
                    status,
                    is_paid,
                    stipend_amount,
                    supervisor_id: supervisor_id.map(Some),
                    academic_supervisor_id: academic_supervisor_id.map(Some),
                    validated_by: None,
                },
            )
            .await
            .map_err(|e| match e {
                InternshipRepositoryError::NotFound => UpdateInternshipError::NotFound,
                other => UpdateInternshipError::RepositoryError(other.to_string()),
            })
    }
}
