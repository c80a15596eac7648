use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    student::application::ports::incoming::use_cases::GetStudentsError,
    AppState,
};

#[get("/api/students")]
pub async fn get_students_handler(
    _manager: Manager,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_students_use_case.execute().await {
        Ok(students) => ApiResponse::success("Students retrieved successfully.", students),
        Err(GetStudentsError::QueryError(ref e)) => {
            error!(error = %e, "Student listing failed");
            ApiResponse::internal_error()
        }
    }
}
