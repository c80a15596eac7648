use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    auth::application::use_cases::delete_user::DeleteUserError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    _manager: Manager,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_user_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("User deleted successfully."),
        Err(DeleteUserError::NotFound) => ApiResponse::not_found("User not found"),
        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User delete failed");
            ApiResponse::internal_error()
        }
    }
}
