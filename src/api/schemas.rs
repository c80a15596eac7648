use serde::Serialize;
use utoipa::ToSchema;

/// Documentation-only mirror of the success envelope.
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse<T: ToSchema> {
    /// "success" or "info"
    #[schema(example = "success")]
    pub status: String,

    #[schema(example = "Login successful!")]
    pub message: String,

    pub data: T,
}

/// Documentation-only mirror of the error envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,

    #[schema(example = "Invalid email or password")]
    pub message: String,
}
