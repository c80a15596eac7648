use async_trait::async_trait;
use chrono::Utc;

use crate::internship::application::{
    domain::entities::{FinishedInternshipItem, InternshipListItem},
    ports::outgoing::InternshipQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SupervisorListingError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// The supervisor's portfolio view.
#[async_trait]
pub trait ISupervisorInternshipsUseCase: Send + Sync {
    async fn execute(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipListItem>, SupervisorListingError>;
}

/// Internships past their end date, with the supervisor's own evaluation
/// joined in; the evaluation screen's data source.
#[async_trait]
pub trait IFinishedInternshipsUseCase: Send + Sync {
    async fn execute(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<FinishedInternshipItem>, SupervisorListingError>;
}

/// Department-head queue of internships still waiting for a supervisor.
#[async_trait]
pub trait IProposedInternshipsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<InternshipListItem>, SupervisorListingError>;
}

pub struct SupervisorListings<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SupervisorListings<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISupervisorInternshipsUseCase for SupervisorListings<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<InternshipListItem>, SupervisorListingError> {
        self.query
            .list_by_supervisor(supervisor_id)
            .await
            .map_err(SupervisorListingError::QueryError)
    }
}

#[async_trait]
impl<Q> IFinishedInternshipsUseCase for SupervisorListings<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        supervisor_id: i32,
    ) -> Result<Vec<FinishedInternshipItem>, SupervisorListingError> {
        self.query
            .list_finished_by_supervisor(supervisor_id, Utc::now().date_naive())
            .await
            .map_err(SupervisorListingError::QueryError)
    }
}

#[async_trait]
impl<Q> IProposedInternshipsUseCase for SupervisorListings<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<InternshipListItem>, SupervisorListingError> {
        self.query
            .list_proposed()
            .await
            .map_err(SupervisorListingError::QueryError)
    }
}
