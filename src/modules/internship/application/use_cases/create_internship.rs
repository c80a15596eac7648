use async_trait::async_trait;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::internship::application::{
    domain::{entities::Internship, status::InternshipStatus},
    ports::outgoing::{InternshipRepository, InternshipRepositoryError, NewInternship},
};

//
// ──────────────────────────────────────────────────────────
// Create Internship Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateInternshipCommand {
    pub student_id: i32,
    pub subject_id: Option<i32>,
    pub internship_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: InternshipStatus,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateInternshipCommandError {
    #[error("Internship type is required")]
    MissingType,

    #[error("Date format must be YYYY-MM-DD")]
    BadDate,

    #[error("End date must not precede start date")]
    DatesReversed,

    #[error("{0}")]
    BadStatus(String),

    #[error("Stipend amount must be non-negative")]
    NegativeStipend,
}

impl CreateInternshipCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        student_id: i32,
        subject_id: Option<i32>,
        internship_type: String,
        start_date: &str,
        end_date: &str,
        status: &str,
        is_paid: bool,
        stipend_amount: Option<f64>,
        supervisor_id: Option<i32>,
        academic_supervisor_id: Option<i32>,
    ) -> Result<Self, CreateInternshipCommandError> {
        let internship_type = internship_type.trim().to_string();
        if internship_type.is_empty() {
            return Err(CreateInternshipCommandError::MissingType);
        }

        let start_date = NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
            .map_err(|_| CreateInternshipCommandError::BadDate)?;
        let end_date = NaiveDate::parse_from_str(end_date.trim(), "%Y-%m-%d")
            .map_err(|_| CreateInternshipCommandError::BadDate)?;

        if end_date < start_date {
            return Err(CreateInternshipCommandError::DatesReversed);
        }

        let status = InternshipStatus::from_str(status)
            .map_err(|e| CreateInternshipCommandError::BadStatus(e.to_string()))?;

        if let Some(amount) = stipend_amount {
            if amount < 0.0 {
                return Err(CreateInternshipCommandError::NegativeStipend);
            }
        }

        Ok(Self {
            student_id,
            subject_id,
            internship_type,
            start_date,
            end_date,
            status,
            is_paid,
            stipend_amount,
            supervisor_id,
            academic_supervisor_id,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateInternshipError {
    #[error("Referenced record not found: {0}")]
    BrokenReference(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateInternshipUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateInternshipCommand,
    ) -> Result<Internship, CreateInternshipError>;
}

pub struct CreateInternshipUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateInternshipUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateInternshipUseCase for CreateInternshipUseCase<R>
where
    R: InternshipRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateInternshipCommand,
    ) -> Result<Internship, CreateInternshipError> {
        self.repository
            .insert(NewInternship {
                student_id: command.student_id,
                subject_id: command.subject_id,
                internship_type: command.internship_type,
                start_date: command.start_date,
                end_date: command.end_date,
                status: command.status,
                is_paid: command.is_paid,
                stipend_amount: command.stipend_amount,
                supervisor_id: command.supervisor_id,
                academic_supervisor_id: command.academic_supervisor_id,
            })
            .await
            .map_err(|e| match e {
                InternshipRepositoryError::BrokenReference(what) => {
                    CreateInternshipError::BrokenReference(what)
                }
                other => CreateInternshipError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_parses_dates_and_status() {
        let cmd = CreateInternshipCommand::new(
            3,
            Some(9),
            "PFE".to_string(),
            "2025-06-01",
            "2025-08-31",
            "Proposed",
            true,
            Some(300.0),
            None,
            None,
        )
        .unwrap();

        assert_eq!(cmd.status, InternshipStatus::Proposed);
        assert_eq!(cmd.start_date.to_string(), "2025-06-01");
    }

    #[test]
    fn command_accepts_legacy_status_spelling() {
        let cmd = CreateInternshipCommand::new(
            3,
            None,
            "PFE".to_string(),
            "2025-06-01",
            "2025-08-31",
            "Proposé",
            false,
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(cmd.status, InternshipStatus::Proposed);
    }

    #[test]
    fn command_rejects_bad_date_format() {
        let result = CreateInternshipCommand::new(
            3,
            None,
            "PFE".to_string(),
            "01/06/2025",
            "2025-08-31",
            "Proposed",
            false,
            None,
            None,
            None,
        );

        assert!(matches!(result, Err(CreateInternshipCommandError::BadDate)));
    }

    #[test]
    fn command_rejects_reversed_dates() {
        let result = CreateInternshipCommand::new(
            3,
            None,
            "PFE".to_string(),
            "2025-08-31",
            "2025-06-01",
            "Proposed",
            false,
            None,
            None,
            None,
        );

        assert!(matches!(
            result,
            Err(CreateInternshipCommandError::DatesReversed)
        ));
    }

    #[test]
    fn command_rejects_unknown_status() {
        let result = CreateInternshipCommand::new(
            3,
            None,
            "PFE".to_string(),
            "2025-06-01",
            "2025-08-31",
            "Cancelled",
            false,
            None,
            None,
            None,
        );

        assert!(matches!(
            result,
            Err(CreateInternshipCommandError::BadStatus(_))
        ));
    }
}
