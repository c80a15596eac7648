use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::{
    domain::entities::{Role, User},
    ports::outgoing::UserQuery,
};

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user_id: i32,
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        // password_hash deliberately never leaves the application layer
        Self {
            user_id: user.id,
            username: user.username,
            lastname: user.lastname,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self, role: Option<Role>) -> Result<Vec<UserSummary>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, role: Option<Role>) -> Result<Vec<UserSummary>, ListUsersError> {
        let users = self
            .query
            .list(role)
            .await
            .map_err(ListUsersError::QueryError)?;

        Ok(users.into_iter().map(UserSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockUserQuery {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: i32) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn list(&self, role: Option<Role>) -> Result<Vec<User>, String> {
            Ok(self
                .users
                .iter()
                .filter(|u| role.is_none() || role == Some(u.role))
                .cloned()
                .collect())
        }
    }

    fn user(id: i32, role: Role) -> User {
        User {
            id,
            username: format!("user{id}"),
            lastname: "Doe".to_string(),
            email: format!("user{id}@example.com"),
            password_hash: "hash".to_string(),
            role,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_all_users_without_filter() {
        let uc = ListUsersUseCase::new(MockUserQuery {
            users: vec![user(1, Role::Gestionnaire), user(2, Role::Encadrant)],
        });

        let result = uc.execute(None).await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn role_filter_narrows_listing() {
        let uc = ListUsersUseCase::new(MockUserQuery {
            users: vec![user(1, Role::Gestionnaire), user(2, Role::Encadrant)],
        });

        let result = uc.execute(Some(Role::Encadrant)).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, 2);
    }

    #[tokio::test]
    async fn summary_never_contains_password_hash() {
        let uc = ListUsersUseCase::new(MockUserQuery {
            users: vec![user(1, Role::Encadrant)],
        });

        let result = uc.execute(None).await.unwrap();
        let json = serde_json::to_value(&result[0]).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
