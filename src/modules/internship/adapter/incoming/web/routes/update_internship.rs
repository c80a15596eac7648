use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    internship::application::use_cases::update_internship::{
        UpdateInternshipCommand, UpdateInternshipError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateInternshipRequest {
    pub internship_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub is_paid: Option<bool>,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
}

#[put("/api/internships/{id}")]
pub async fn update_internship_handler(
    _manager: Manager,
    path: web::Path<i32>,
    payload: web::Json<UpdateInternshipRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = UpdateInternshipCommand {
        internship_id: path.into_inner(),
        internship_type: body.internship_type,
        start_date: body.start_date,
        end_date: body.end_date,
        status: body.status,
        is_paid: body.is_paid,
        stipend_amount: body.stipend_amount,
        supervisor_id: body.supervisor_id,
        academic_supervisor_id: body.academic_supervisor_id,
    };

    match data.update_internship_use_case.execute(command).await {
        Ok(internship) => ApiResponse::success("Internship updated successfully.", internship),
        Err(UpdateInternshipError::NotFound) => ApiResponse::not_found("Internship not found"),
        Err(
            e @ (UpdateInternshipError::EmptyUpdate
            | UpdateInternshipError::BadDate
            | UpdateInternshipError::BadStatus(_)
            | UpdateInternshipError::IllegalTransition { .. }),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateInternshipError::RepositoryError(ref e)) => {
            error!(error = %e, "Internship update failed");
            ApiResponse::internal_error()
        }
    }
}
