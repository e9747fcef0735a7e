use axum::{Json, extract::State, response::IntoResponse};
use minted_application::RegisterUseCase;
use minted_core::{Mailer, PasswordHasher, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::MessageResponse;
use crate::http::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct RegisterRequest {
    // Absent fields fall back to empty so they fail the presence check
    // instead of the JSON deserializer
    #[serde(default)]
    pub name: String,
    #[serde(default = "super::empty_secret")]
    pub email: Secret<String>,
    #[serde(default = "super::empty_secret")]
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
    M: Mailer + Clone + 'static,
{
    let use_case = RegisterUseCase::new(
        state.user_store,
        state.password_hasher,
        state.token_service,
        state.mailer,
        state.client_base_url,
    );

    use_case
        .execute(request.name, request.email, request.password)
        .await?;

    Ok(Json(MessageResponse {
        msg: String::from("Register success! Please activate your email to start"),
    }))
}
