use minted_core::{
    Email, PasswordHashError, PasswordHasher, SessionClaims, TokenError, TokenKind, TokenService,
    UserStore, UserStoreError,
};
use secrecy::Secret;

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("This email does not exist")]
    UnknownEmail,
    #[error("Password is incorrect")]
    InvalidCredentials,
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hash error: {0}")]
    HashError(PasswordHashError),
}

/// Login use case - authenticates credentials and mints the refresh token.
///
/// Deliberately mints nothing else: the caller turns the refresh token into
/// an access token through the refresh endpoint.
pub struct LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: U,
    password_hasher: H,
    token_service: T,
}

impl<U, H, T> LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(user_store: U, password_hasher: H, token_service: T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the login use case, returning the refresh token on success.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<String, LoginError> {
        // A malformed address can never match a stored account, so it gets
        // the same answer as an unknown one
        let email = Email::try_from(email).map_err(|_| LoginError::UnknownEmail)?;

        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::UnknownEmail),
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };

        self.password_hasher
            .verify_password(user.password_hash(), &password)
            .await
            .map_err(|e| match e {
                PasswordHashError::Mismatch => LoginError::InvalidCredentials,
                other => LoginError::HashError(other),
            })?;

        let claims = SessionClaims::new(user.id());
        let refresh_token = self.token_service.issue(TokenKind::Refresh, &claims)?;

        Ok(refresh_token)
    }
}
