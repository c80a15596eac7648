use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    student::application::ports::incoming::use_cases::{
        CreateStudentCommand, CreateStudentError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub cin: String,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}

#[post("/api/students")]
pub async fn create_student_handler(
    _manager: Manager,
    payload: web::Json<CreateStudentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = match CreateStudentCommand::new(
        body.username,
        body.lastname,
        body.email,
        body.cin,
        body.study_level,
        body.faculty,
        body.cycle,
        body.speciality,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.create_student_use_case.execute(command).await {
        Ok(student) => ApiResponse::created("Student added successfully!", student),
        Err(e @ (CreateStudentError::EmailTaken | CreateStudentError::CinTaken)) => {
            ApiResponse::conflict(&format!("{}.", e))
        }
        Err(CreateStudentError::RepositoryError(ref e)) => {
            error!(error = %e, "Student insert failed");
            ApiResponse::internal_error()
        }
    }
}
