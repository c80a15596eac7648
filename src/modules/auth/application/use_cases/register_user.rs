use async_trait::async_trait;
use std::str::FromStr;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::{NewUser, UserRepository, UserRepositoryError},
    services::hash::PasswordHashingService,
};
use email_address::EmailAddress;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    lastname: String,
    email: String,
    password: String,
    role: Role,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("All fields (username, password, email, lastname, role) are required")]
    MissingField,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Invalid role specified. Allowed roles are: Gestionnaire, Encadrant, ChefCentreInformatique")]
    InvalidRole,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        lastname: String,
        email: String,
        password: String,
        role: String,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim().to_string();
        let lastname = lastname.trim().to_string();
        let email = email.trim().to_lowercase();

        if username.is_empty() || lastname.is_empty() || email.is_empty() || password.is_empty() {
            return Err(RegisterUserCommandError::MissingField);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmailFormat);
        }

        if password.len() < 6 {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        let role = Role::from_str(role.trim()).map_err(|_| RegisterUserCommandError::InvalidRole)?;

        Ok(Self {
            username,
            lastname,
            email,
            password,
            role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisteredUser {
    pub user_id: i32,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<RegisteredUser, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<R> RegisterUserUseCase<R>
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
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password.clone())
            .await
            .map_err(RegisterUserError::HashingFailed)?;

        // Uniqueness lives on the DB constraint; the adapter reports the
        // violation as EmailTaken so two concurrent signups cannot race
        // past an application-level check.
        let inserted = self
            .repository
            .insert(NewUser {
                username: command.username,
                lastname: command.lastname,
                email: command.email,
                password_hash,
                role: command.role,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailTaken => RegisterUserError::EmailTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisteredUser {
            user_id: inserted.id,
        })
    }
}
