use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// The verified caller. Every protected route goes through this extractor
/// before any business logic or database access runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Multi-role allow-list check for the handful of endpoints shared
    /// between roles. The 403 body names the allowed roles and nothing else.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), HttpResponse> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(forbidden(allowed))
        }
    }
}

fn forbidden(allowed: &[Role]) -> HttpResponse {
    let roles = allowed
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    ApiResponse::forbidden(&format!(
        "Access denied. Allowed roles: {}.",
        roles
    ))
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Result<String, HttpResponse> {
    let header = match req.headers().get("Authorization") {
        Some(h) => h,
        None => {
            return Err(ApiResponse::unauthorized("Authorization header missing."));
        }
    };

    header
        .to_str()
        .ok()
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .ok_or_else(|| {
            ApiResponse::unauthorized(
                "Bearer token missing or malformed in Authorization header.",
            )
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Ok(t) => t,
            Err(resp) => return ready(Err(create_api_error(resp))),
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                username: claims.username,
                role: claims.role,
            })),
            Err(TokenError::Expired) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Token has expired. Please log in again.",
            )))),
            Err(TokenError::InvalidSignature) => ready(Err(create_api_error(
                ApiResponse::unauthorized("Invalid token signature."),
            ))),
            Err(e) => {
                tracing::debug!(error = %e, "Token verification failed");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Invalid or malformed token.",
                ))))
            }
        }
    }
}

macro_rules! role_extractor {
    ($name:ident, $role:expr) => {
        /// Single-role gate layered on [`AuthenticatedUser`].
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthenticatedUser);

        impl FromRequest for $name {
            type Error = ActixError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
                match AuthenticatedUser::from_request(req, payload).into_inner() {
                    Ok(user) if user.role == $role => ready(Ok($name(user))),
                    Ok(_) => ready(Err(create_api_error(forbidden(&[$role])))),
                    Err(e) => ready(Err(e)),
                }
            }
        }
    };
}

role_extractor!(Manager, Role::Gestionnaire);
role_extractor!(Supervisor, Role::Encadrant);
role_extractor!(DepartmentHead, Role::ChefCentreInformatique);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenClaims;
    use actix_web::{get, test, web, App, Responder};

    struct StubTokenProvider {
        result: Result<TokenClaims, TokenError>,
    }

    impl TokenProvider for StubTokenProvider {
        fn generate_token(
            &self,
            _user_id: i32,
            _username: &str,
            _role: Role,
        ) -> Result<String, TokenError> {
            unimplemented!("not used in extractor tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            self.result.clone()
        }
    }

    fn claims(role: Role) -> TokenClaims {
        TokenClaims {
            sub: 2,
            username: "supervisor".to_string(),
            role,
            iat: 0,
            exp: 9_999_999_999,
        }
    }

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        ApiResponse::success("ok", serde_json::json!({"user_id": user.user_id}))
    }

    #[get("/manager-only")]
    async fn manager_only(_manager: Manager) -> impl Responder {
        ApiResponse::ok("manager")
    }

    macro_rules! app_with {
        ($provider:expr) => {{
            let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new($provider);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(provider))
                    .service(whoami)
                    .service(manager_only),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn missing_header_is_401() {
        let app = app_with!(StubTokenProvider {
            result: Ok(claims(Role::Encadrant)),
        });

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Authorization header missing.");
    }

    #[actix_web::test]
    async fn non_bearer_header_is_401() {
        let app = app_with!(StubTokenProvider {
            result: Ok(claims(Role::Encadrant)),
        });

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn expired_token_is_401_with_login_again_hint() {
        let app = app_with!(StubTokenProvider {
            result: Err(TokenError::Expired),
        });

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer some-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token has expired. Please log in again.");
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler() {
        let app = app_with!(StubTokenProvider {
            result: Ok(claims(Role::Encadrant)),
        });

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer some-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], 2);
    }

    #[actix_web::test]
    async fn wrong_role_is_403_naming_allowed_roles() {
        let app = app_with!(StubTokenProvider {
            result: Ok(claims(Role::Encadrant)),
        });

        let req = test::TestRequest::get()
            .uri("/manager-only")
            .insert_header(("Authorization", "Bearer some-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Access denied. Allowed roles: Gestionnaire."
        );
    }

    #[actix_web::test]
    async fn matching_role_passes_gate() {
        let app = app_with!(StubTokenProvider {
            result: Ok(claims(Role::Gestionnaire)),
        });

        let req = test::TestRequest::get()
            .uri("/manager-only")
            .insert_header(("Authorization", "Bearer some-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[::core::prelude::v1::test]
    fn require_any_rejects_role_outside_allow_list() {
        let user = AuthenticatedUser {
            user_id: 1,
            username: "u".to_string(),
            role: Role::Encadrant,
        };

        assert!(user.require_any(&[Role::Encadrant]).is_ok());
        assert!(user
            .require_any(&[Role::Gestionnaire, Role::ChefCentreInformatique])
            .is_err());
    }
}
