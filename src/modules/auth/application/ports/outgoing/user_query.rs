use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, User};

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, String>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;

    /// Directory listing, optionally restricted to one role
    /// (the supervisor dropdowns only want `Encadrant`).
    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, String>;
}
