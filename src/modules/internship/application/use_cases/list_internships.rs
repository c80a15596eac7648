use async_trait::async_trait;

use crate::internship::application::{
    domain::{entities::InternshipListItem, status::InternshipStatus},
    ports::outgoing::InternshipQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInternshipsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListInternshipsUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<InternshipStatus>,
    ) -> Result<Vec<InternshipListItem>, ListInternshipsError>;
}

pub struct ListInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListInternshipsUseCase for ListInternshipsUseCase<Q>
where
    Q: InternshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        status: Option<InternshipStatus>,
    ) -> Result<Vec<InternshipListItem>, ListInternshipsError> {
        self.query
            .list(status)
            .await
            .map_err(ListInternshipsError::QueryError)
    }
}
