use axum::{Json, extract::State, response::IntoResponse};
use minted_application::ActivateUseCase;
use minted_core::{TokenService, UserStore};
use serde::Deserialize;

use super::MessageResponse;
use crate::http::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct ActivationRequest {
    #[serde(default)]
    pub activation_token: String,
}

#[tracing::instrument(name = "Activate account", skip_all)]
pub async fn activate<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    Json(request): Json<ActivationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = ActivateUseCase::new(state.user_store, state.token_service);

    use_case.execute(&request.activation_token).await?;

    Ok(Json(MessageResponse {
        msg: String::from("Account has been activated!"),
    }))
}
