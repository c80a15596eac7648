use async_trait::async_trait;
use chrono::NaiveDate;

use crate::internship::application::domain::{
    entities::Internship, status::InternshipStatus,
};

#[derive(Debug, Clone)]
pub struct NewInternship {
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

/// Manager edit; `None` leaves the column untouched. Status changes are
/// validated against the transition table before this is built.
#[derive(Debug, Clone, Default)]
pub struct UpdateInternshipData {
    pub internship_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<InternshipStatus>,
    pub is_paid: Option<bool>,
    pub stipend_amount: Option<Option<f64>>,
    pub supervisor_id: Option<Option<i32>>,
    pub academic_supervisor_id: Option<Option<i32>>,
    pub validated_by: Option<Option<i32>>,
}

/// Result of the compare-and-set subject assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignSubjectOutcome {
    Assigned,
    /// Zero rows matched: the internship does not exist or another
    /// supervisor already claimed it. Deliberately not distinguished, so
    /// the response cannot be used to probe other supervisors' portfolios.
    NotAssignable,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InternshipRepositoryError {
    #[error("Internship not found")]
    NotFound,

    /// A referenced row (student, subject, supervisor) does not exist.
    #[error("Referenced record not found: {0}")]
    BrokenReference(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InternshipRepository: Send + Sync {
    async fn insert(&self, data: NewInternship) -> Result<Internship, InternshipRepositoryError>;

    async fn update(
        &self,
        internship_id: i32,
        data: UpdateInternshipData,
    ) -> Result<Internship, InternshipRepositoryError>;

    /// Single guarded UPDATE:
    /// `SET subject_id, supervisor_id, status = InProgress
    ///  WHERE id = ? AND (supervisor_id IS NULL OR supervisor_id = ?)`.
    /// The guard is what makes two supervisors racing for the same
    /// internship safe: exactly one statement matches.
    async fn assign_subject(
        &self,
        internship_id: i32,
        subject_id: i32,
        supervisor_id: i32,
    ) -> Result<AssignSubjectOutcome, InternshipRepositoryError>;

    async fn set_status(
        &self,
        internship_id: i32,
        status: InternshipStatus,
    ) -> Result<(), InternshipRepositoryError>;
}
