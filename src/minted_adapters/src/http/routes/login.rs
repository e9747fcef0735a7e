use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use minted_application::LoginUseCase;
use minted_core::{PasswordHasher, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::MessageResponse;
use crate::http::{cookies::refresh_cookie, error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default = "super::empty_secret")]
    pub email: Secret<String>,
    #[serde(default = "super::empty_secret")]
    pub password: Secret<String>,
}

/// Login hands out a refresh token in an HTTP-only cookie and nothing
/// else. The client trades the cookie for an access token at the refresh
/// endpoint.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.user_store,
        state.password_hasher,
        state.token_service,
    );

    let refresh_token = use_case.execute(request.email, request.password).await?;

    let jar = jar.add(refresh_cookie(refresh_token, state.refresh_ttl_seconds));

    Ok((
        jar,
        Json(MessageResponse {
            msg: String::from("Login success!"),
        }),
    ))
}
