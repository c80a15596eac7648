use async_trait::async_trait;

use crate::attestation::application::{
    domain::entities::AttestationData, ports::outgoing::AttestationQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAttestationError {
    #[error("No attestation found for this internship")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetAttestationDataUseCase: Send + Sync {
    async fn execute(&self, internship_id: i32) -> Result<AttestationData, GetAttestationError>;
}

pub struct GetAttestationDataUseCase<Q>
where
    Q: AttestationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAttestationDataUseCase<Q>
where
    Q: AttestationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetAttestationDataUseCase for GetAttestationDataUseCase<Q>
where
    Q: AttestationQuery + Send + Sync,
{
    async fn execute(&self, internship_id: i32) -> Result<AttestationData, GetAttestationError> {
        self.query
            .full_data(internship_id)
            .await
            .map_err(GetAttestationError::QueryError)?
            .ok_or(GetAttestationError::NotFound)
    }
}
