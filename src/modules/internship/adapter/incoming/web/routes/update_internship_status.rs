use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::DepartmentHead,
    internship::application::use_cases::update_status::UpdateStatusError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Direct status write by the department head. Landing the internship in
/// `Validated` queues the acceptance letter and email; the response's
/// `notification` field says whether that happened.
#[put("/api/internships/{id}/status")]
pub async fn update_internship_status_handler(
    _head: DepartmentHead,
    path: web::Path<i32>,
    payload: web::Json<UpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_status_use_case
        .execute(path.into_inner(), &payload.status)
        .await
    {
        Ok(result) => ApiResponse::success("Internship status updated successfully.", result),
        Err(UpdateStatusError::NotFound) => ApiResponse::not_found("Internship not found"),
        Err(
            e @ (UpdateStatusError::BadStatus(_) | UpdateStatusError::IllegalTransition { .. }),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateStatusError::RepositoryError(ref e)) => {
            error!(error = %e, "Internship status update failed");
            ApiResponse::internal_error()
        }
    }
}
