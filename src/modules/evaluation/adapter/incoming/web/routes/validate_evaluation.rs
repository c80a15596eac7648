use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    auth::adapter::incoming::web::extractors::auth::DepartmentHead,
    evaluation::application::use_cases::counter_validate_evaluation::CounterValidateError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ValidateEvaluationRequest {
    /// "validate" or "reject"
    #[serde(alias = "actionType")]
    pub action_type: String,
}

/// Final counter-validation by the department head. The evaluation stamp
/// and the internship status flip are one transaction; a failure leaves
/// both untouched.
#[post("/api/evaluations/{id}/validate-or-reject")]
pub async fn validate_evaluation_handler(
    head: DepartmentHead,
    path: web::Path<i32>,
    payload: web::Json<ValidateEvaluationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let evaluation_id = path.into_inner();
    let chef_id = head.0.user_id;

    match data
        .counter_validate_use_case
        .execute(evaluation_id, chef_id, &payload.action_type)
        .await
    {
        Ok(result) => {
            info!(evaluation_id, chef_id, status = %result.status, "Evaluation counter-validated");
            let message = match payload.action_type.as_str() {
                "validate" => "Evaluation validated successfully.",
                _ => "Evaluation rejected successfully.",
            };
            ApiResponse::success(message, result)
        }
        Err(e @ CounterValidateError::BadAction) => ApiResponse::bad_request(&e.to_string()),
        Err(CounterValidateError::NotFound) => ApiResponse::not_found("Evaluation not found"),
        Err(CounterValidateError::RepositoryError(ref e)) => {
            error!(error = %e, "Counter-validation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::evaluation::application::use_cases::counter_validate_evaluation::{
        CounterValidationResult, ICounterValidateUseCase,
    };
    use crate::internship::application::domain::status::InternshipStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockCounterValidate {
        result: Result<CounterValidationResult, CounterValidateError>,
    }

    #[async_trait]
    impl ICounterValidateUseCase for MockCounterValidate {
        async fn execute(
            &self,
            _evaluation_id: i32,
            _chef_id: i32,
            _action_type: &str,
        ) -> Result<CounterValidationResult, CounterValidateError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn department_head_validates_evaluation() {
        let app_state = TestAppStateBuilder::default()
            .with_counter_validate(MockCounterValidate {
                result: Ok(CounterValidationResult {
                    evaluation_id: 12,
                    status: InternshipStatus::Validated,
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_for(7, Role::ChefCentreInformatique))
                .service(validate_evaluation_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations/12/validate-or-reject")
            .insert_header(bearer())
            .set_json(serde_json::json!({"actionType": "validate"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Evaluation validated successfully.");
        assert_eq!(body["data"]["status"], "Validated");
    }

    #[actix_web::test]
    async fn missing_evaluation_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_counter_validate(MockCounterValidate {
                result: Err(CounterValidateError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_for(7, Role::ChefCentreInformatique))
                .service(validate_evaluation_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations/404/validate-or-reject")
            .insert_header(bearer())
            .set_json(serde_json::json!({"action_type": "reject"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn supervisor_cannot_counter_validate() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_for(2, Role::Encadrant))
                .service(validate_evaluation_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations/12/validate-or-reject")
            .insert_header(bearer())
            .set_json(serde_json::json!({"action_type": "validate"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Access denied. Allowed roles: ChefCentreInformatique."
        );
    }
}
