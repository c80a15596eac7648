use actix_web::{get, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    internship::application::domain::status::InternshipStatus,
    internship::application::use_cases::list_internships::ListInternshipsError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListInternshipsQuery {
    /// Optional status filter; accepts canonical and legacy spellings.
    pub status: Option<String>,
}

#[get("/api/internships")]
pub async fn list_internships_handler(
    _manager: Manager,
    query: web::Query<ListInternshipsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match &query.status {
        Some(raw) => match InternshipStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(e) => return ApiResponse::bad_request(&e.to_string()),
        },
        None => None,
    };

    match data.list_internships_use_case.execute(status).await {
        Ok(items) => ApiResponse::success("Internships retrieved successfully.", items),
        Err(ListInternshipsError::QueryError(ref e)) => {
            error!(error = %e, "Internship listing failed");
            ApiResponse::internal_error()
        }
    }
}
