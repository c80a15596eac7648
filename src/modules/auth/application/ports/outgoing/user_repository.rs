use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, User};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update(&self, user_id: i32, data: UpdateUserData)
        -> Result<User, UserRepositoryError>;

    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError>;
}
