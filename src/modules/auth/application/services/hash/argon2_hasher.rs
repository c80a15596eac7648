use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use rand_core::OsRng;

use super::password_hasher::PasswordHasher as HasherTrait;

pub struct Argon2Hasher {
    argon2: Argon2<'static>,
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            salt_override: None,
        }
    }

    // test-only
    pub fn with_salt(salt: SaltString) -> Self {
        Self {
            argon2: Argon2::default(),
            salt_override: Some(salt),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HasherTrait for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        let salt = match &self.salt_override {
            Some(s) => s.clone(),
            None => SaltString::generate(&mut OsRng),
        };
        match self.argon2.hash_password(password.as_bytes(), &salt) {
            Ok(password_hash) => Ok(password_hash.to_string()),
            Err(e) => Err(format!("Failed to hash password: {}", e)),
        }
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        match PasswordHash::new(hashed) {
            Ok(parsed_hash) => {
                match self
                    .argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                {
                    Ok(_) => Ok(true),
                    Err(PasswordHashError::Password) => Ok(false),
                    Err(e) => Err(format!("Password verification failed: {}", e)),
                }
            }
            Err(_) => Err("Invalid hash format".to_string()),
        }
    }
}
