use async_trait::async_trait;

use crate::attestation::application::domain::entities::{Attestation, AttestationData};

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// Fresh row created in this call.
    Created(Attestation),
    /// One already existed; generation is idempotent per internship.
    AlreadyExists(Attestation),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttestationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttestationRepository: Send + Sync {
    /// Inserts the attestation and stamps its QR payload
    /// (`{qr_base_url}?attestationID={id}`) in one transaction. Returns
    /// the existing row untouched when one is already on record.
    async fn generate(
        &self,
        internship_id: i32,
        qr_base_url: &str,
    ) -> Result<GenerateOutcome, AttestationRepositoryError>;
}

#[async_trait]
pub trait AttestationQuery: Send + Sync {
    /// Whether the internship completed its lifecycle (Validated) with a
    /// rated evaluation on record.
    async fn is_eligible(&self, internship_id: i32) -> Result<bool, String>;

    /// The full certificate bundle; `None` when no attestation exists or
    /// the internship is not in a presentable state.
    async fn full_data(&self, internship_id: i32) -> Result<Option<AttestationData>, String>;
}
