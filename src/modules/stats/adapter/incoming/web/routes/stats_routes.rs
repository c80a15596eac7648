use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    stats::application::use_cases::{
        get_distribution::GetDistributionError, get_kpis::GetKpisError,
    },
    AppState,
};

#[get("/api/stats/kpis")]
pub async fn get_kpis_handler(_manager: Manager, data: web::Data<AppState>) -> impl Responder {
    match data.get_kpis_use_case.execute().await {
        Ok(kpis) => ApiResponse::success("KPI data retrieved successfully.", kpis),
        Err(GetKpisError::QueryError(ref e)) => {
            error!(error = %e, "KPI query failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/stats/internship-distribution")]
pub async fn get_internship_distribution_handler(
    _manager: Manager,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_distribution_use_case.execute().await {
        Ok(distribution) => {
            ApiResponse::success("Distribution data retrieved successfully.", distribution)
        }
        Err(GetDistributionError::QueryError(ref e)) => {
            error!(error = %e, "Distribution query failed");
            ApiResponse::internal_error()
        }
    }
}
