use minted_core::{
    Email, Mailer, SessionClaims, TokenError, TokenKind, TokenService, UserStore, UserStoreError,
};
use secrecy::Secret;

/// Error types specific to the forgot password use case
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("This email does not exist")]
    UnknownEmail,
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Forgot password use case - mails a reset link to a registered address.
///
/// The link carries an ordinary access token for the account, which the
/// reset endpoint later accepts as its bearer credential.
pub struct ForgotPasswordUseCase<U, T, M>
where
    U: UserStore,
    T: TokenService,
    M: Mailer + Clone + 'static,
{
    user_store: U,
    token_service: T,
    mailer: M,
    client_base_url: String,
}

impl<U, T, M> ForgotPasswordUseCase<U, T, M>
where
    U: UserStore,
    T: TokenService,
    M: Mailer + Clone + 'static,
{
    pub fn new(user_store: U, token_service: T, mailer: M, client_base_url: String) -> Self {
        Self {
            user_store,
            token_service,
            mailer,
            client_base_url,
        }
    }

    /// Execute the forgot password use case
    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Secret<String>) -> Result<(), ForgotPasswordError> {
        let email = Email::try_from(email).map_err(|_| ForgotPasswordError::UnknownEmail)?;

        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(ForgotPasswordError::UnknownEmail),
            Err(e) => return Err(ForgotPasswordError::UserStoreError(e)),
        };

        let claims = SessionClaims::new(user.id());
        let reset_token = self.token_service.issue(TokenKind::Access, &claims)?;
        let reset_link = format!(
            "{}/user/reset/{}",
            self.client_base_url.trim_end_matches('/'),
            reset_token
        );

        // Mail delivery must not hold up or fail the response
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(error) = mailer.send_reset_link(&email, &reset_link).await {
                tracing::warn!("Failed to send reset mail: {error}");
            }
        });

        Ok(())
    }
}
