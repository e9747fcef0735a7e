use axum::{Json, extract::State, response::IntoResponse};
use minted_application::ForgotPasswordUseCase;
use minted_core::{Mailer, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::MessageResponse;
use crate::http::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default = "super::empty_secret")]
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Mailer + Clone + 'static,
{
    let use_case = ForgotPasswordUseCase::new(
        state.user_store,
        state.token_service,
        state.mailer,
        state.client_base_url,
    );

    use_case.execute(request.email).await?;

    Ok(Json(MessageResponse {
        msg: String::from("Re-send the password, Please check your email"),
    }))
}
