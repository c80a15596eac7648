use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, Manager},
    auth::application::domain::entities::Role,
    shared::api::ApiResponse,
    subject::application::ports::incoming::use_cases::{
        CreateSubjectCommand, CreateSubjectError, DeleteSubjectError, GetSubjectsError,
        UpdateSubjectCommand, UpdateSubjectError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub title: String,
    pub description: String,
    pub pdf_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

#[post("/api/subjects")]
pub async fn create_subject_handler(
    _manager: Manager,
    payload: web::Json<CreateSubjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = match CreateSubjectCommand::new(body.title, body.description, body.pdf_url) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.create_subject_use_case.execute(command).await {
        Ok(subject) => ApiResponse::created("Subject added successfully!", subject),
        Err(CreateSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject insert failed");
            ApiResponse::internal_error()
        }
    }
}

/// Supervisors browse the catalogue when assigning a subject, so this
/// listing is shared between the two roles.
#[get("/api/subjects")]
pub async fn get_subjects_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_any(&[Role::Gestionnaire, Role::Encadrant]) {
        return resp;
    }

    match data.get_subjects_use_case.execute().await {
        Ok(subjects) => ApiResponse::success("Subjects retrieved successfully.", subjects),
        Err(GetSubjectsError::QueryError(ref e)) => {
            error!(error = %e, "Subject listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/subjects/{id}")]
pub async fn update_subject_handler(
    _manager: Manager,
    path: web::Path<i32>,
    payload: web::Json<UpdateSubjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = UpdateSubjectCommand {
        subject_id: path.into_inner(),
        title: body.title,
        description: body.description,
        pdf_url: body.pdf_url,
    };

    match data.update_subject_use_case.execute(command).await {
        Ok(subject) => ApiResponse::success("Subject updated successfully.", subject),
        Err(UpdateSubjectError::NotFound) => ApiResponse::not_found("Subject not found"),
        Err(e @ UpdateSubjectError::EmptyUpdate) => ApiResponse::bad_request(&e.to_string()),
        Err(UpdateSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject update failed");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/subjects/{id}")]
pub async fn delete_subject_handler(
    _manager: Manager,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_subject_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("Subject deleted successfully."),
        Err(DeleteSubjectError::NotFound) => ApiResponse::not_found("Subject not found"),
        Err(DeleteSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject delete failed");
            ApiResponse::internal_error()
        }
    }
}
