use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    auth::application::use_cases::update_user::{UpdateUserCommand, UpdateUserError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[put("/api/users/{id}")]
pub async fn update_user_handler(
    _manager: Manager,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = UpdateUserCommand {
        user_id: path.into_inner(),
        username: body.username,
        lastname: body.lastname,
        email: body.email,
        password: body.password,
        role: body.role,
    };

    match data.update_user_use_case.execute(command).await {
        Ok(user) => ApiResponse::success("User updated successfully.", user),
        Err(UpdateUserError::NotFound) => ApiResponse::not_found("User not found"),
        Err(UpdateUserError::EmailTaken) => {
            ApiResponse::conflict("Email already registered. Please use a different email.")
        }
        Err(
            e @ (UpdateUserError::EmptyUpdate
            | UpdateUserError::InvalidEmailFormat
            | UpdateUserError::PasswordTooShort
            | UpdateUserError::InvalidRole),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateUserError::HashingFailed(ref e))
        | Err(UpdateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User update failed");
            ApiResponse::internal_error()
        }
    }
}
