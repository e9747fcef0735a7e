use minted_core::{SessionClaims, TokenError, TokenKind, TokenService};

/// Error types specific to the refresh session use case
#[derive(Debug, thiserror::Error)]
pub enum RefreshSessionError {
    #[error("Please login now")]
    SessionExpired,
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Refresh session use case - exchanges a refresh token for a fresh access
/// token. Purely token work; the store is never consulted, so a deleted or
/// demoted account keeps its session until the refresh token runs out.
pub struct RefreshSessionUseCase<T>
where
    T: TokenService,
{
    token_service: T,
}

impl<T> RefreshSessionUseCase<T>
where
    T: TokenService,
{
    pub fn new(token_service: T) -> Self {
        Self { token_service }
    }

    /// Execute the refresh session use case
    ///
    /// A missing cookie and a failed verification both collapse into
    /// `SessionExpired`; the caller cannot tell which one happened and is
    /// just told to log in again.
    #[tracing::instrument(name = "RefreshSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: Option<&str>) -> Result<String, RefreshSessionError> {
        let refresh_token = refresh_token.ok_or(RefreshSessionError::SessionExpired)?;

        let claims: SessionClaims = self
            .token_service
            .verify(TokenKind::Refresh, refresh_token)
            .map_err(|_| RefreshSessionError::SessionExpired)?;

        let access_token = self.token_service.issue(TokenKind::Access, &claims)?;

        Ok(access_token)
    }
}
