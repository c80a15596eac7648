use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::{TokenProvider, UserQuery},
    services::hash::PasswordHashingService,
};
use email_address::EmailAddress;

// ========================= Login Request =========================
/// Validated login request; constructing one guarantees a plausible
/// email and a non-empty password.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email and password are required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Email and password are required")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
    pub token: String,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: PasswordHashingService,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // The same error for "no such user" and "wrong password":
        // login must not reveal which half failed.
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(LoginError::QueryError)?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password().to_string(), user.password_hash.clone())
            .await
            .map_err(LoginError::PasswordVerificationFailed)?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_token(user.id, &user.username, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            user_id: user.id,
            username: user.username,
            role: user.role,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::{TokenClaims, TokenError};
    use crate::auth::application::services::hash::PasswordHasher;
    use async_trait::async_trait;

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_valid_and_normalized() {
        let request = LoginRequest::new(
            "  Test@Example.COM  ".to_string(),
            "password123".to_string(),
        )
        .unwrap();

        assert_eq!(request.email(), "test@example.com");
        assert_eq!(request.password(), "password123");
    }

    #[test]
    fn test_login_request_empty_email() {
        let result = LoginRequest::new("".to_string(), "password123".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyEmail)));
    }

    #[test]
    fn test_login_request_invalid_email_format() {
        let result = LoginRequest::new("invalid-email".to_string(), "password123".to_string());
        assert!(matches!(result, Err(LoginRequestError::InvalidEmailFormat)));
    }

    #[test]
    fn test_login_request_empty_password() {
        let result = LoginRequest::new("test@example.com".to_string(), "   ".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyPassword)));
    }

    // ==================== LoginUserUseCase Tests ====================

    #[derive(Default)]
    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: i32) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
            if self.should_fail {
                return Err("Database error".to_string());
            }

            if let Some(user) = &self.user {
                if user.email == email {
                    return Ok(Some(user.clone()));
                }
            }
            Ok(None)
        }

        async fn list(&self, _role: Option<Role>) -> Result<Vec<User>, String> {
            Ok(vec![])
        }
    }

    struct MockPasswordHasher {
        should_verify: bool,
    }

    impl PasswordHasher for MockPasswordHasher {
        fn hash_password(&self, _password: &str) -> Result<String, String> {
            Ok("hashed_password".to_string())
        }

        fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
            Ok(self.should_verify)
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn generate_token(
            &self,
            user_id: i32,
            username: &str,
            role: Role,
        ) -> Result<String, TokenError> {
            Ok(format!("token-{}-{}-{}", user_id, username, role))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn create_test_user() -> User {
        User {
            id: 42,
            username: "testuser".to_string(),
            lastname: "Doe".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            role: Role::Encadrant,
            created_at: chrono::Utc::now(),
        }
    }

    fn use_case(
        query: MockUserQuery,
        should_verify: bool,
    ) -> LoginUserUseCase<MockUserQuery> {
        LoginUserUseCase::new(
            query,
            PasswordHashingService::with_hasher(MockPasswordHasher { should_verify }),
            Arc::new(StubTokenProvider),
        )
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = create_test_user();
        let uc = use_case(
            MockUserQuery {
                user: Some(user.clone()),
                should_fail: false,
            },
            true,
        );

        let request =
            LoginRequest::new("test@example.com".to_string(), "password123".to_string()).unwrap();

        let result = uc.execute(request).await;

        assert!(result.is_ok(), "Expected successful login, got {:?}", result.err());
        let response = result.unwrap();
        assert_eq!(response.user_id, 42);
        assert_eq!(response.username, "testuser");
        assert_eq!(response.role, Role::Encadrant);
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let uc = use_case(MockUserQuery::default(), true);

        let request = LoginRequest::new(
            "nonexistent@example.com".to_string(),
            "password123".to_string(),
        )
        .unwrap();

        let result = uc.execute(request).await;

        assert!(
            matches!(result, Err(LoginError::InvalidCredentials)),
            "Expected InvalidCredentials, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let user = create_test_user();
        let uc = use_case(
            MockUserQuery {
                user: Some(user),
                should_fail: false,
            },
            false,
        );

        let request =
            LoginRequest::new("test@example.com".to_string(), "wrongpassword".to_string())
                .unwrap();

        let result = uc.execute(request).await;

        assert!(
            matches!(result, Err(LoginError::InvalidCredentials)),
            "Expected InvalidCredentials, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let uc = use_case(
            MockUserQuery {
                user: None,
                should_fail: true,
            },
            true,
        );

        let request =
            LoginRequest::new("test@example.com".to_string(), "password123".to_string()).unwrap();

        let result = uc.execute(request).await;

        assert!(
            matches!(result, Err(LoginError::QueryError(_))),
            "Expected QueryError, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_email_case_insensitive() {
        let user = create_test_user();
        let uc = use_case(
            MockUserQuery {
                user: Some(user),
                should_fail: false,
            },
            true,
        );

        let request =
            LoginRequest::new("Test@Example.COM".to_string(), "password123".to_string()).unwrap();

        let result = uc.execute(request).await;
        assert!(result.is_ok(), "Should succeed with normalized email");
    }
}
