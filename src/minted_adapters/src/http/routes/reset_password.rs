use axum::{Json, extract::State, response::IntoResponse};
use minted_application::ResetPasswordUseCase;
use minted_core::{PasswordHasher, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::MessageResponse;
use crate::http::{error::ApiError, extractors::AuthenticatedUser, state::AppState};

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default = "super::empty_secret")]
    pub password: Secret<String>,
}

/// The reset link mails out a plain access token, so this endpoint sits
/// behind the same bearer gate as every other authenticated route.
#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(state.user_store, state.password_hasher);

    use_case.execute(identity, request.password).await?;

    Ok(Json(MessageResponse {
        msg: String::from("Password successfully changed!"),
    }))
}
