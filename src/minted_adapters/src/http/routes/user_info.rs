use axum::{Json, extract::State, response::IntoResponse};
use minted_core::{SanitizedUser, TokenService, UserStore};

use crate::http::{
    error::ApiError,
    extractors::{AuthenticatedUser, RequireAdmin},
    state::AppState,
};

#[tracing::instrument(name = "User info", skip_all)]
pub async fn user_info<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let user = state.user_store.find_by_id(identity.user_id).await?;

    Ok(Json(user.sanitized()))
}

#[tracing::instrument(name = "List users", skip_all)]
pub async fn all_users<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    _admin: RequireAdmin,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let users = state.user_store.list_users().await?;
    let users: Vec<SanitizedUser> = users.into_iter().map(|user| user.sanitized()).collect();

    Ok(Json(users))
}
