use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    user::{Role, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for accounts.
///
/// `add_user` must reject a second account with the same email, even when
/// two activations race each other; implementations back this with whatever
/// uniqueness primitive their storage offers.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<User, UserStoreError>;
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: Secret<String>,
    ) -> Result<(), UserStoreError>;
    async fn update_profile(
        &self,
        id: Uuid,
        name: String,
        avatar: String,
    ) -> Result<(), UserStoreError>;
    async fn update_role(&self, id: Uuid, role: Role) -> Result<(), UserStoreError>;
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
}
