use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    internship::application::use_cases::create_internship::{
        CreateInternshipCommand, CreateInternshipError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateInternshipRequest {
    pub student_id: i32,
    pub subject_id: Option<i32>,
    pub internship_type: String,
    /// YYYY-MM-DD
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub is_paid: bool,
    pub stipend_amount: Option<f64>,
    pub supervisor_id: Option<i32>,
    pub academic_supervisor_id: Option<i32>,
}

#[post("/api/internships")]
pub async fn create_internship_handler(
    _manager: Manager,
    payload: web::Json<CreateInternshipRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = match CreateInternshipCommand::new(
        body.student_id,
        body.subject_id,
        body.internship_type,
        &body.start_date,
        &body.end_date,
        &body.status,
        body.is_paid,
        body.stipend_amount,
        body.supervisor_id,
        body.academic_supervisor_id,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.create_internship_use_case.execute(command).await {
        Ok(internship) => ApiResponse::created("Internship added successfully!", internship),
        Err(CreateInternshipError::BrokenReference(ref what)) => ApiResponse::bad_request(
            &format!("Referenced {what} does not exist."),
        ),
        Err(CreateInternshipError::RepositoryError(ref e)) => {
            error!(error = %e, "Internship insert failed");
            ApiResponse::internal_error()
        }
    }
}
