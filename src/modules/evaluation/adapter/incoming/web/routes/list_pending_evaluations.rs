use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::DepartmentHead,
    evaluation::application::use_cases::list_pending_evaluations::ListPendingError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/evaluations/pending")]
pub async fn list_pending_evaluations_handler(
    _head: DepartmentHead,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_pending_evaluations_use_case.execute().await {
        Ok(items) => ApiResponse::success("Pending evaluations retrieved successfully.", items),
        Err(ListPendingError::QueryError(ref e)) => {
            error!(error = %e, "Pending-evaluation listing failed");
            ApiResponse::internal_error()
        }
    }
}
