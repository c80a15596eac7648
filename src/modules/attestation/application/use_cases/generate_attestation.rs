use async_trait::async_trait;

use crate::attestation::application::{
    domain::entities::AttestationData,
    ports::outgoing::{
        AttestationQuery, AttestationRepository, AttestationRepositoryError, GenerateOutcome,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// Fresh attestation with its full bundle.
    Generated(AttestationData),
    /// Already on record; the caller reports this with the `info` envelope.
    AlreadyGenerated(AttestationData),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateAttestationError {
    #[error("Internship is not eligible for an attestation yet")]
    NotEligible,

    #[error("Attestation stored but its data could not be retrieved")]
    DataUnavailable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGenerateAttestationUseCase: Send + Sync {
    async fn execute(
        &self,
        internship_id: i32,
    ) -> Result<GenerationResult, GenerateAttestationError>;
}

/// One attestation per internship, ever. Eligibility (Validated + rated
/// evaluation) is checked before any write; the insert-plus-QR-stamp runs
/// as one transaction in the repository.
pub struct GenerateAttestationUseCase<R, Q>
where
    R: AttestationRepository + Send + Sync,
    Q: AttestationQuery + Send + Sync,
{
    repository: R,
    query: Q,
    qr_base_url: String,
}

impl<R, Q> GenerateAttestationUseCase<R, Q>
where
    R: AttestationRepository + Send + Sync,
    Q: AttestationQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, qr_base_url: String) -> Self {
        Self {
            repository,
            query,
            qr_base_url,
        }
    }
}

#[async_trait]
impl<R, Q> IGenerateAttestationUseCase for GenerateAttestationUseCase<R, Q>
where
    R: AttestationRepository + Send + Sync,
    Q: AttestationQuery + Send + Sync,
{
    async fn execute(
        &self,
        internship_id: i32,
    ) -> Result<GenerationResult, GenerateAttestationError> {
        let eligible = self
            .query
            .is_eligible(internship_id)
            .await
            .map_err(GenerateAttestationError::RepositoryError)?;

        if !eligible {
            return Err(GenerateAttestationError::NotEligible);
        }

        let outcome = self
            .repository
            .generate(internship_id, &self.qr_base_url)
            .await
            .map_err(|e: AttestationRepositoryError| {
                GenerateAttestationError::RepositoryError(e.to_string())
            })?;

        let data = self
            .query
            .full_data(internship_id)
            .await
            .map_err(GenerateAttestationError::RepositoryError)?
            .ok_or(GenerateAttestationError::DataUnavailable)?;

        Ok(match outcome {
            GenerateOutcome::Created(_) => GenerationResult::Generated(data),
            GenerateOutcome::AlreadyExists(_) => GenerationResult::AlreadyGenerated(data),
        })
    }
}
