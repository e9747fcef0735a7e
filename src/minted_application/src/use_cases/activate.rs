use minted_core::{
    Email, EmailError, PendingRegistration, TokenError, TokenKind, TokenService, User, UserStore,
    UserStoreError,
};

/// Error types specific to the activate use case
#[derive(Debug, thiserror::Error)]
pub enum ActivateError {
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("This email already exists")]
    DuplicateEmail,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Activate use case - turns a valid activation token into a persisted
/// account. This is the only place accounts are created.
pub struct ActivateUseCase<U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: U,
    token_service: T,
}

impl<U, T> ActivateUseCase<U, T>
where
    U: UserStore,
    T: TokenService,
{
    pub fn new(user_store: U, token_service: T) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    /// Execute the activate use case
    ///
    /// Two tokens for the same email may both reach this point; the store's
    /// uniqueness guarantee decides the race, so the second caller gets
    /// `DuplicateEmail` no matter how close the timing.
    #[tracing::instrument(name = "ActivateUseCase::execute", skip_all)]
    pub async fn execute(&self, activation_token: &str) -> Result<(), ActivateError> {
        let pending: PendingRegistration = self
            .token_service
            .verify(TokenKind::Activation, activation_token)?;

        let email = Email::try_from(pending.email.clone())?;

        match self.user_store.find_by_email(&email).await {
            Ok(_) => return Err(ActivateError::DuplicateEmail),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(ActivateError::UserStoreError(e)),
        }

        let user = User::new(pending.name, email, pending.password_hash);

        match self.user_store.add_user(user).await {
            Ok(()) => Ok(()),
            // Lost the race against a concurrent activation of the same email
            Err(UserStoreError::UserAlreadyExists) => Err(ActivateError::DuplicateEmail),
            Err(e) => Err(ActivateError::UserStoreError(e)),
        }
    }
}
