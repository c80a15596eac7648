mod token_provider;
mod user_query;
mod user_repository;

pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::UserQuery;
pub use user_repository::{NewUser, UpdateUserData, UserRepository, UserRepositoryError};
