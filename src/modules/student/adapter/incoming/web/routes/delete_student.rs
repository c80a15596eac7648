use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    student::application::ports::incoming::use_cases::DeleteStudentError,
    AppState,
};

#[delete("/api/students/{id}")]
pub async fn delete_student_handler(
    _manager: Manager,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_student_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("Student deleted successfully."),
        Err(DeleteStudentError::NotFound) => ApiResponse::not_found("Student not found"),
        Err(DeleteStudentError::HasInternships) => ApiResponse::conflict(
            "Student cannot be deleted while internships reference them.",
        ),
        Err(DeleteStudentError::RepositoryError(ref e)) => {
            error!(error = %e, "Student delete failed");
            ApiResponse::internal_error()
        }
    }
}
