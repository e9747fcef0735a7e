use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use minted_core::{
    RequestIdentity, SessionClaims, TokenKind, TokenService, UserStore, UserStoreError,
};

use super::{error::ApiError, state::AppState};

/// The identity behind a verified access token.
///
/// Rejects with `Unauthorized` when the header is missing and with the
/// token error's own mapping when verification fails, so an expired access
/// token surfaces differently from a tampered one.
pub struct AuthenticatedUser(pub RequestIdentity);

impl<U, H, T, M> FromRequestParts<AppState<U, H, T, M>> for AuthenticatedUser
where
    U: Send + Sync,
    H: Send + Sync,
    T: TokenService,
    M: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, H, T, M>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApiError::Unauthorized)?;

        let claims: SessionClaims = state.token_service.verify(TokenKind::Access, token)?;

        Ok(AuthenticatedUser(RequestIdentity::from(claims)))
    }
}

/// An authenticated identity whose account holds the admin role.
///
/// Token verification alone is not enough here; the account is loaded and
/// its role checked before the request reaches the handler.
pub struct RequireAdmin {
    pub identity: RequestIdentity,
}

impl<U, H, T, M> FromRequestParts<AppState<U, H, T, M>> for RequireAdmin
where
    U: UserStore,
    H: Send + Sync,
    T: TokenService,
    M: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, H, T, M>,
    ) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(identity) =
            AuthenticatedUser::from_request_parts(parts, state).await?;

        let user = state
            .user_store
            .find_by_id(identity.user_id)
            .await
            .map_err(|e| match e {
                // A valid token for an account that no longer exists
                UserStoreError::UserNotFound => ApiError::Unauthorized,
                other => other.into(),
            })?;

        if !user.role().is_admin() {
            return Err(ApiError::Forbidden);
        }

        Ok(RequireAdmin { identity })
    }
}

/// Pull the access token out of the Authorization header. The `Bearer `
/// scheme prefix is optional; some clients send the raw token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() { None } else { Some(token) }
}
