use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    auth::adapter::incoming::web::extractors::auth::Supervisor,
    internship::application::use_cases::assign_subject::AssignSubjectError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct AssignSubjectRequest {
    /// Legacy clients send this as "sujetID".
    #[serde(alias = "sujetID")]
    pub subject_id: i32,
}

/// The supervisor claims a proposed internship: one guarded write sets the
/// subject, takes ownership and moves the status to InProgress.
#[post("/api/internships/{id}/assign-subject")]
pub async fn assign_subject_handler(
    supervisor: Supervisor,
    path: web::Path<i32>,
    payload: web::Json<AssignSubjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let internship_id = path.into_inner();
    let subject_id = payload.subject_id;
    let supervisor_id = supervisor.0.user_id;

    match data
        .assign_subject_use_case
        .execute(internship_id, subject_id, supervisor_id)
        .await
    {
        Ok(()) => {
            info!(internship_id, subject_id, supervisor_id, "Subject assigned");
            ApiResponse::ok("Subject assigned and internship moved to InProgress.")
        }
        Err(AssignSubjectError::NotAssignable) => ApiResponse::conflict(
            "Internship not found or already assigned to another supervisor.",
        ),
        Err(AssignSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject assignment failed");
            ApiResponse::internal_error()
        }
    }
}
