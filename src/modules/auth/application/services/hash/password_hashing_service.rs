use super::{argon2_hasher::Argon2Hasher, password_hasher::PasswordHasher};
use std::sync::Arc;
use tokio::task;

/// Runs the (CPU-heavy) hasher on the blocking pool so a login burst
/// cannot starve the async executor.
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl Clone for PasswordHashingService {
    fn clone(&self) -> Self {
        Self {
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl PasswordHashingService {
    pub fn argon2() -> Self {
        Self {
            hasher: Arc::new(Argon2Hasher::new()),
        }
    }

    pub fn with_hasher(hasher: impl PasswordHasher + Send + Sync + 'static) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| e.to_string())?
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| e.to_string())?
    }
}
