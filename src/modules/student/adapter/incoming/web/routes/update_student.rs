use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    student::application::ports::incoming::use_cases::{
        UpdateStudentCommand, UpdateStudentError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub username: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub cin: Option<String>,
    pub study_level: Option<String>,
    pub faculty: Option<String>,
    pub cycle: Option<String>,
    pub speciality: Option<String>,
}

#[put("/api/students/{id}")]
pub async fn update_student_handler(
    _manager: Manager,
    path: web::Path<i32>,
    payload: web::Json<UpdateStudentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = UpdateStudentCommand {
        student_id: path.into_inner(),
        username: body.username,
        lastname: body.lastname,
        email: body.email,
        cin: body.cin,
        study_level: body.study_level,
        faculty: body.faculty,
        cycle: body.cycle,
        speciality: body.speciality,
    };

    match data.update_student_use_case.execute(command).await {
        Ok(student) => ApiResponse::success("Student updated successfully.", student),
        Err(UpdateStudentError::NotFound) => ApiResponse::not_found("Student not found"),
        Err(e @ (UpdateStudentError::EmailTaken | UpdateStudentError::CinTaken)) => {
            ApiResponse::conflict(&format!("{}.", e))
        }
        Err(e @ (UpdateStudentError::EmptyUpdate | UpdateStudentError::InvalidEmailFormat)) => {
            ApiResponse::bad_request(&e.to_string())
        }
        Err(UpdateStudentError::RepositoryError(ref e)) => {
            error!(error = %e, "Student update failed");
            ApiResponse::internal_error()
        }
    }
}
