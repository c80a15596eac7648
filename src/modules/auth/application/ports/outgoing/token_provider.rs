use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::Role;

/// Payload carried by a bearer token. Everything an endpoint needs for
/// authorization lives here; no DB round-trip on the hot path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: i32,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Verification failures, ordered by how the caller reports them.
/// None of the variants carry library error detail; that is logged
/// at the adapter boundary only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, user_id: i32, username: &str, role: Role)
        -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
