use async_trait::async_trait;
use std::str::FromStr;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::{UpdateUserData, UserRepository, UserRepositoryError},
    services::hash::PasswordHashingService,
};
use email_address::EmailAddress;

use super::list_users::UserSummary;

/// Partial update; absent fields are left untouched. A new password is
/// re-hashed, never stored raw.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: i32,
    pub username: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Invalid role specified")]
    InvalidRole,

    #[error("User not found")]
    NotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError>;
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: PasswordHashingService) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError> {
        if command.username.is_none()
            && command.lastname.is_none()
            && command.email.is_none()
            && command.password.is_none()
            && command.role.is_none()
        {
            return Err(UpdateUserError::EmptyUpdate);
        }

        let email = match command.email {
            Some(e) => {
                let e = e.trim().to_lowercase();
                if !EmailAddress::is_valid(&e) {
                    return Err(UpdateUserError::InvalidEmailFormat);
                }
                Some(e)
            }
            None => None,
        };

        let role = match command.role {
            Some(r) => {
                Some(Role::from_str(r.trim()).map_err(|_| UpdateUserError::InvalidRole)?)
            }
            None => None,
        };

        let password_hash = match command.password {
            Some(p) => {
                if p.len() < 6 {
                    return Err(UpdateUserError::PasswordTooShort);
                }
                Some(
                    self.password_hasher
                        .hash_password(p)
                        .await
                        .map_err(UpdateUserError::HashingFailed)?,
                )
            }
            None => None,
        };

        let updated = self
            .repository
            .update(
                command.user_id,
                UpdateUserData {
                    username: command.username,
                    lastname: command.lastname,
                    email,
                    password_hash,
                    role,
                },
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateUserError::NotFound,
                UserRepositoryError::EmailTaken => UpdateUserError::EmailTaken,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(UserSummary::from(updated))
    }
}
