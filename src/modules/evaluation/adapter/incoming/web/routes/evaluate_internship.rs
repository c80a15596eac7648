use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    auth::adapter::incoming::web::extractors::auth::Supervisor,
    evaluation::application::use_cases::submit_evaluation::{
        SubmitEvaluationCommand, SubmitEvaluationError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EvaluateInternshipRequest {
    /// "validate" or "unvalidate"
    #[serde(default = "default_action", alias = "actionType")]
    pub action_type: String,

    /// Legacy clients spell this field "displine".
    #[serde(alias = "displine")]
    pub discipline: Option<String>,

    pub interest: Option<String>,
    pub presence: Option<String>,

    /// Missed-days count. Legacy clients send it as "note".
    #[serde(alias = "note")]
    pub missed_days: Option<i32>,

    #[serde(alias = "commentaires")]
    pub comments: Option<String>,
}

fn default_action() -> String {
    "validate".to_string()
}

/// Supervisor evaluation of an owned internship. `validate` records the
/// ratings and moves the internship to Finished; `unvalidate` clears them
/// and moves it to Refused. Resubmission updates the same row.
#[post("/api/internships/{id}/evaluate")]
pub async fn evaluate_internship_handler(
    supervisor: Supervisor,
    path: web::Path<i32>,
    payload: web::Json<EvaluateInternshipRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();
    let internship_id = path.into_inner();
    let supervisor_id = supervisor.0.user_id;

    let command = SubmitEvaluationCommand {
        internship_id,
        supervisor_id,
        action_type: body.action_type,
        discipline: body.discipline,
        interest: body.interest,
        presence: body.presence,
        missed_days: body.missed_days,
        comments: body.comments,
    };

    match data.submit_evaluation_use_case.execute(command).await {
        Ok(result) => {
            info!(
                internship_id,
                supervisor_id,
                status = %result.status,
                "Evaluation submitted"
            );
            ApiResponse::success(
                &format!("Internship evaluated. Status updated to '{}'.", result.status),
                result,
            )
        }
        Err(
            e @ (SubmitEvaluationError::BadAction | SubmitEvaluationError::InvalidRatings(_)),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ SubmitEvaluationError::NotAssigned) => {
            ApiResponse::forbidden(&format!("{}.", e))
        }
        Err(SubmitEvaluationError::RepositoryError(ref e)) => {
            error!(error = %e, "Evaluation submission failed");
            ApiResponse::internal_error()
        }
    }
}
