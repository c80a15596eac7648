use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Fixed TTL in seconds; there is no refresh flow, clients
    /// re-authenticate on expiry.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY is not set");
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "internship-backend".to_string());
        let token_expiry = env::var("JWT_EXPIRATION_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .expect("JWT_EXPIRATION_SECONDS must be an integer");

        Self {
            secret_key,
            issuer,
            token_expiry,
        }
    }
}
