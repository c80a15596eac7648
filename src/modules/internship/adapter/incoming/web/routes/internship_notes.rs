use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Supervisor,
    internship::application::use_cases::internship_notes::NoteError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub content: String,
}

#[post("/api/internships/{id}/notes")]
pub async fn add_internship_note_handler(
    supervisor: Supervisor,
    path: web::Path<i32>,
    payload: web::Json<AddNoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .add_note_use_case
        .execute(
            path.into_inner(),
            supervisor.0.user_id,
            payload.into_inner().content,
        )
        .await
    {
        Ok(note) => ApiResponse::created("Note added successfully!", note),
        Err(e @ NoteError::EmptyContent) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ NoteError::NotAssigned) => ApiResponse::forbidden(&format!("{}.", e)),
        Err(NoteError::RepositoryError(ref e)) => {
            error!(error = %e, "Note insert failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/internships/{id}/notes")]
pub async fn get_internship_notes_handler(
    supervisor: Supervisor,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .get_notes_use_case
        .execute(path.into_inner(), supervisor.0.user_id)
        .await
    {
        Ok(notes) => ApiResponse::success("Notes retrieved successfully.", notes),
        Err(e @ NoteError::NotAssigned) => ApiResponse::forbidden(&format!("{}.", e)),
        Err(e @ NoteError::EmptyContent) => ApiResponse::bad_request(&e.to_string()),
        Err(NoteError::RepositoryError(ref e)) => {
            error!(error = %e, "Note listing failed");
            ApiResponse::internal_error()
        }
    }
}
