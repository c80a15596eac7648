use async_trait::async_trait;

use crate::internship::application::{
    domain::{entities::InternshipListItem, status::InternshipStatus},
    ports::outgoing::InternshipQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListValidatedError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Manager's attestation screen: every internship that reached Validated.
#[async_trait]
pub trait IListValidatedInternshipsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<InternshipListItem>, ListValidatedError>;
}

pub struct ListValidatedInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListValidatedInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListValidatedInternshipsUseCase for ListValidatedInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<InternshipListItem>, ListValidatedError> {
        self.query
            .list(Some(InternshipStatus::Validated))
            .await
            .map_err(ListValidatedError::QueryError)
    }
}
