use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::{DepartmentHead, Supervisor},
    internship::application::use_cases::supervisor_listings::SupervisorListingError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/internships/mine")]
pub async fn list_my_internships_handler(
    supervisor: Supervisor,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .supervisor_internships_use_case
        .execute(supervisor.0.user_id)
        .await
    {
        Ok(items) => ApiResponse::success("Assigned internships retrieved successfully.", items),
        Err(SupervisorListingError::QueryError(ref e)) => {
            error!(error = %e, "Supervisor listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/internships/finished")]
pub async fn list_finished_internships_handler(
    supervisor: Supervisor,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .finished_internships_use_case
        .execute(supervisor.0.user_id)
        .await
    {
        Ok(items) => ApiResponse::success("Finished internships retrieved successfully.", items),
        Err(SupervisorListingError::QueryError(ref e)) => {
            error!(error = %e, "Finished-internship listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/internships/proposed")]
pub async fn list_proposed_internships_handler(
    _head: DepartmentHead,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.proposed_internships_use_case.execute().await {
        Ok(items) => ApiResponse::success("Proposed internships retrieved successfully.", items),
        Err(SupervisorListingError::QueryError(ref e)) => {
            error!(error = %e, "Proposed-internship listing failed");
            ApiResponse::internal_error()
        }
    }
}
