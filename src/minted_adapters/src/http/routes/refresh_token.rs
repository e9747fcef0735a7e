use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use minted_application::RefreshSessionUseCase;
use minted_core::TokenService;
use serde::{Deserialize, Serialize};

use crate::config::REFRESH_COOKIE_NAME;
use crate::http::{error::ApiError, state::AppState};

#[derive(Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Exchange the refresh cookie for a short-lived access token. A missing,
/// expired or tampered cookie all get the same client error.
#[tracing::instrument(name = "Refresh access token", skip_all)]
pub async fn refresh_token<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    U: Clone + Send + Sync + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = RefreshSessionUseCase::new(state.token_service);

    let refresh_token = jar.get(REFRESH_COOKIE_NAME).map(|cookie| cookie.value());
    let access_token = use_case.execute(refresh_token).await?;

    Ok(Json(AccessTokenResponse { access_token }))
}
