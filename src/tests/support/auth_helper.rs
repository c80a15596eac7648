use actix_web::web;
use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Token provider that accepts any bearer token and yields fixed claims.
/// Route tests pair this with [`bearer`] so the extractor chain runs for
/// the role under test without real signing.
struct FixedClaimsProvider {
    user_id: i32,
    role: Role,
}

impl TokenProvider for FixedClaimsProvider {
    fn generate_token(
        &self,
        _user_id: i32,
        _username: &str,
        _role: Role,
    ) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            username: "testuser".to_string(),
            role: self.role,
            iat: 0,
            exp: 9_999_999_999,
        })
    }
}

pub fn token_provider_for(
    user_id: i32,
    role: Role,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(FixedClaimsProvider { user_id, role });
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
