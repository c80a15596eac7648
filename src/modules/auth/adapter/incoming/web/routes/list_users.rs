use actix_web::{get, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    auth::application::domain::entities::Role,
    auth::application::use_cases::list_users::ListUsersError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Optional role filter, e.g. `?role=Encadrant` for the supervisor
    /// directory.
    pub role: Option<String>,
}

#[get("/api/users")]
pub async fn list_users_handler(
    _manager: Manager,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let role = match &query.role {
        Some(raw) => match Role::from_str(raw) {
            Ok(role) => Some(role),
            Err(_) => {
                return ApiResponse::bad_request(
                    "Invalid role filter. Allowed roles are: Gestionnaire, Encadrant, ChefCentreInformatique",
                )
            }
        },
        None => None,
    };

    match data.list_users_use_case.execute(role).await {
        Ok(users) => ApiResponse::success("Users retrieved successfully.", users),
        Err(ListUsersError::QueryError(ref e)) => {
            error!(error = %e, "User listing failed");
            ApiResponse::internal_error()
        }
    }
}
