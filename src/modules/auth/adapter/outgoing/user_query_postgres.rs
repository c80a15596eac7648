use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::str::FromStr;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::outgoing::UserQuery;

use super::sea_orm_entity::users::{Column, Entity as Users, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: UserModel) -> Result<User, String> {
    let role = Role::from_str(&model.role)
        .map_err(|e| format!("Corrupt role value in users table: {}", e))?;

    Ok(User {
        id: model.id,
        username: model.username,
        lastname: model.lastname,
        email: model.email,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    })
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, String> {
        Users::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        Users::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .map(to_domain)
            .transpose()
    }

    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, String> {
        let mut query = Users::find().order_by_asc(Column::Id);

        if let Some(role) = role {
            query = query.filter(Column::Role.eq(role.as_str()));
        }

        query
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}
