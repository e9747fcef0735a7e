use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{email::Email, password::Password};

/// Outbound mail port. Implementations own the mail copy; callers only hand
/// over the link the recipient must follow.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_activation_link(&self, recipient: &Email, link: &str) -> Result<(), String>;
    async fn send_reset_link(&self, recipient: &Email, link: &str) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password is incorrect")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PasswordHashError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Mismatch, Self::Mismatch) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Password hashing port.
///
/// Hashing only ever sees policy-checked passwords; verification takes the
/// raw candidate so accounts predating the length policy can still log in.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password) -> Result<Secret<String>, PasswordHashError>;
    async fn verify_password(
        &self,
        expected_hash: &Secret<String>,
        candidate: &Secret<String>,
    ) -> Result<(), PasswordHashError>;
}
