use minted_core::{
    Password, PasswordError, PasswordHashError, PasswordHasher, RequestIdentity, UserStore,
    UserStoreError,
};
use secrecy::Secret;

/// Error types specific to the reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Weak password: {0}")]
    WeakPassword(#[from] PasswordError),
    #[error("Password hash error: {0}")]
    HashError(#[from] PasswordHashError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Reset password use case - rehashes and stores a new password for the
/// authenticated account. The same flow serves both the mailed reset link
/// and an ordinary logged-in password change.
pub struct ResetPasswordUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> ResetPasswordUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the reset password use case
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        identity: RequestIdentity,
        password: Secret<String>,
    ) -> Result<(), ResetPasswordError> {
        let password = Password::try_from(password)?;
        let password_hash = self.password_hasher.hash_password(&password).await?;

        self.user_store
            .update_password(identity.user_id, password_hash)
            .await?;

        Ok(())
    }
}
