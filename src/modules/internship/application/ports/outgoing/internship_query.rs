use async_trait::async_trait;
use chrono::NaiveDate;

use crate::internship::application::domain::{
    entities::{AcceptanceContext, FinishedInternshipItem, Internship, InternshipListItem},
    status::InternshipStatus,
};

#[async_trait]
pub trait InternshipQuery: Send + Sync {
    async fn find_by_id(&self, internship_id: i32) -> Result<Option<Internship>, String>;

    /// Manager listing, optionally filtered by status.
    async fn list(&self, status: Option<InternshipStatus>)
        -> Result<Vec<InternshipListItem>, String>;

    /// Internships the supervisor currently owns.
    async fn list_by_supervisor(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipListItem>, String>;

    /// Supervisor's internships whose end date has passed, joined with
    /// that supervisor's evaluation row when one exists.
    async fn list_finished_by_supervisor(
        &self,
        supervisor_id: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<FinishedInternshipItem>, String>;

    /// Department-head view of internships awaiting a supervisor.
    async fn list_proposed(&self) -> Result<Vec<InternshipListItem>, String>;

    /// Ownership check backing every supervisor-scoped mutation.
    async fn is_assigned_to(&self, internship_id: i32, supervisor_id: i32)
        -> Result<bool, String>;

    /// Student and subject context for the acceptance notice.
    async fn acceptance_context(
        &self,
        internship_id: i32,
    ) -> Result<Option<AcceptanceContext>, String>;
}
