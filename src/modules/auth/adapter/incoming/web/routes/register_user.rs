use crate::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "amani")]
    pub username: String,

    #[schema(example = "Ben Salah")]
    pub lastname: String,

    #[schema(example = "amani@steg.tn")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// One of: Gestionnaire, Encadrant, ChefCentreInformatique
    #[schema(example = "Encadrant")]
    pub role: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponseDto {
    #[schema(example = 17)]
    pub user_id: i32,
}

/// User signup
///
/// Registers a staff account with one of the closed set of roles.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (status = 201, description = "User registered", body = SignupResponseDto),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/signup")]
pub async fn register_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(
        dto.username,
        dto.lastname,
        dto.email,
        dto.password,
        dto.role,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!(email = %command.email(), "Signup attempt");

    match data.register_user_use_case.execute(command).await {
        Ok(registered) => {
            info!(user_id = registered.user_id, "User registered");
            ApiResponse::created(
                "User registered successfully!",
                SignupResponseDto {
                    user_id: registered.user_id,
                },
            )
        }

        Err(RegisterUserError::EmailTaken) => {
            warn!("Signup rejected: duplicate email");
            ApiResponse::conflict("Email already registered. Please use a different email.")
        }

        Err(RegisterUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::internal_error()
        }
    }
}
