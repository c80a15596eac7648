use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    attestation::application::use_cases::{
        generate_attestation::{GenerateAttestationError, GenerationResult},
        get_attestation_data::GetAttestationError,
        list_validated_internships::ListValidatedError,
    },
    auth::adapter::incoming::web::extractors::auth::Manager,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct GenerateAttestationRequest {
    #[serde(alias = "stageID")]
    pub internship_id: i32,
}

/// Idempotent certificate generation: one attestation per internship, with
/// the QR payload stamped inside the same transaction as the insert.
#[post("/api/attestations/generate")]
pub async fn generate_attestation_handler(
    _manager: Manager,
    payload: web::Json<GenerateAttestationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .generate_attestation_use_case
        .execute(payload.internship_id)
        .await
    {
        Ok(GenerationResult::Generated(data)) => {
            ApiResponse::success("Attestation generated successfully.", data)
        }
        Ok(GenerationResult::AlreadyGenerated(data)) => {
            ApiResponse::info("Attestation already generated for this internship.", data)
        }
        Err(e @ GenerateAttestationError::NotEligible) => {
            ApiResponse::conflict(&format!("{}.", e))
        }
        Err(GenerateAttestationError::DataUnavailable) => {
            error!("Attestation stored but bundle retrieval failed");
            ApiResponse::internal_error()
        }
        Err(GenerateAttestationError::RepositoryError(ref e)) => {
            error!(error = %e, "Attestation generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/attestations/{internship_id}")]
pub async fn get_attestation_data_handler(
    _manager: Manager,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .get_attestation_data_use_case
        .execute(path.into_inner())
        .await
    {
        Ok(bundle) => ApiResponse::success("Attestation data retrieved successfully.", bundle),
        Err(GetAttestationError::NotFound) => {
            ApiResponse::not_found("No attestation found for this internship")
        }
        Err(GetAttestationError::QueryError(ref e)) => {
            error!(error = %e, "Attestation fetch failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/internships/validated")]
pub async fn list_validated_internships_handler(
    _manager: Manager,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_validated_internships_use_case.execute().await {
        Ok(items) => ApiResponse::success("Validated internships retrieved successfully.", items),
        Err(ListValidatedError::QueryError(ref e)) => {
            error!(error = %e, "Validated-internship listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attestation::application::domain::entities::{
        AttestationData, AttestationEvaluation, AttestationInternship, AttestationParty,
        AttestationSubject,
    };
    use crate::attestation::application::use_cases::generate_attestation::IGenerateAttestationUseCase;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn bundle() -> AttestationData {
        AttestationData {
            attestation_id: 1,
            generated_on: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            qr_code_data: "http://localhost/#/attestation_viewer?attestationID=1".to_string(),
            internship: AttestationInternship {
                internship_id: 5,
                internship_type: "PFE".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
                status: "Validated".to_string(),
                is_paid: false,
                stipend_amount: None,
            },
            student: AttestationParty {
                id: 3,
                first_name: "Yassine".to_string(),
                last_name: "Gharbi".to_string(),
                email: "yassine@uni.tn".to_string(),
            },
            subject: AttestationSubject {
                subject_id: Some(9),
                title: Some("Plateforme de supervision".to_string()),
                description: None,
            },
            supervisor: None,
            evaluation: AttestationEvaluation {
                evaluation_id: 12,
                evaluated_on: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
                missed_days: Some(2),
                comments: None,
            },
        }
    }

    #[derive(Clone)]
    struct MockGenerate {
        result: Result<GenerationResult, GenerateAttestationError>,
    }

    #[async_trait]
    impl IGenerateAttestationUseCase for MockGenerate {
        async fn execute(
            &self,
            _internship_id: i32,
        ) -> Result<GenerationResult, GenerateAttestationError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn repeat_generation_uses_info_envelope() {
        let app_state = TestAppStateBuilder::default()
            .with_generate_attestation(MockGenerate {
                result: Ok(GenerationResult::AlreadyGenerated(bundle())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_for(1, Role::Gestionnaire))
                .service(generate_attestation_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/attestations/generate")
            .insert_header(bearer())
            .set_json(serde_json::json!({"stageID": 5}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "info");
        assert_eq!(body["data"]["attestation_id"], 1);
    }

    #[actix_web::test]
    async fn ineligible_internship_is_409() {
        let app_state = TestAppStateBuilder::default()
            .with_generate_attestation(MockGenerate {
                result: Err(GenerateAttestationError::NotEligible),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_for(1, Role::Gestionnaire))
                .service(generate_attestation_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/attestations/generate")
            .insert_header(bearer())
            .set_json(serde_json::json!({"internship_id": 5}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
    }
}
