use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::str::FromStr;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::outgoing::{
    NewUser, UpdateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
    let role = Role::from_str(&model.role).map_err(|e| {
        UserRepositoryError::DatabaseError(format!("Corrupt role value in users table: {}", e))
    })?;

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

/// The unique index on `email` is the source of truth for duplicates;
/// racing inserts both reach the database and exactly one loses here.
fn map_db_err(e: DbErr) -> UserRepositoryError {
    let text = e.to_string();
    if text.contains("duplicate key") && text.contains("email") {
        UserRepositoryError::EmailTaken
    } else {
        UserRepositoryError::DatabaseError(text)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            username: Set(user.username),
            lastname: Set(user.lastname),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            ..Default::default()
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        to_domain(inserted)
    }

    async fn update(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let existing = Users::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active: UserActiveModel = existing.into();

        if let Some(username) = data.username {
            active.username = Set(username);
        }
        if let Some(lastname) = data.lastname {
            active.lastname = Set(lastname);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = data.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(role) = data.role {
            active.role = Set(role.as_str().to_string());
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        to_domain(updated)
    }

    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let result = Users::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }
}
