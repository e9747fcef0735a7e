use minted_core::{
    Email, EmailError, Mailer, Password, PasswordError, PasswordHashError, PasswordHasher,
    PendingRegistration, TokenError, TokenKind, TokenService, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("This email already exists")]
    DuplicateEmail,
    #[error("Weak password: {0}")]
    WeakPassword(PasswordError),
    #[error("Password hash error: {0}")]
    HashError(#[from] PasswordHashError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Register use case - validates a new registration and mails the
/// activation link. No account is persisted here; the pending registration
/// only lives inside the activation token until the link is clicked.
pub struct RegisterUseCase<U, H, T, M>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
    M: Mailer + Clone + 'static,
{
    user_store: U,
    password_hasher: H,
    token_service: T,
    mailer: M,
    client_base_url: String,
}

impl<U, H, T, M> RegisterUseCase<U, H, T, M>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
    M: Mailer + Clone + 'static,
{
    pub fn new(
        user_store: U,
        password_hasher: H,
        token_service: T,
        mailer: M,
        client_base_url: String,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
            mailer,
            client_base_url,
        }
    }

    /// Execute the register use case
    ///
    /// Checks run in a fixed order: presence of all fields, email syntax,
    /// email not already registered, then password policy. The first failed
    /// check decides the error.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: String,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<(), RegisterError> {
        if name.is_empty() || email.expose_secret().is_empty() || password.expose_secret().is_empty()
        {
            return Err(RegisterError::MissingFields);
        }

        let email = Email::try_from(email)?;

        match self.user_store.find_by_email(&email).await {
            Ok(_) => return Err(RegisterError::DuplicateEmail),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let password = Password::try_from(password).map_err(RegisterError::WeakPassword)?;
        let password_hash = self.password_hasher.hash_password(&password).await?;

        let pending = PendingRegistration::new(name, email.as_ref().clone(), password_hash);
        let activation_token = self.token_service.issue(TokenKind::Activation, &pending)?;
        let activation_link = format!(
            "{}/user/activate/{}",
            self.client_base_url.trim_end_matches('/'),
            activation_token
        );

        // Mail delivery must not hold up or fail the response
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(error) = mailer.send_activation_link(&email, &activation_link).await {
                tracing::warn!("Failed to send activation mail: {error}");
            }
        });

        Ok(())
    }
}
