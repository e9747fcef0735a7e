use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use minted_application::{UpdateProfileUseCase, UpdateRoleUseCase};
use minted_core::{Role, TokenService, UserStore};
use serde::Deserialize;
use uuid::Uuid;

use super::MessageResponse;
use crate::http::{
    error::ApiError,
    extractors::{AuthenticatedUser, RequireAdmin},
    state::AppState,
};

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub avatar: String,
}

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

#[tracing::instrument(name = "Update profile", skip_all)]
pub async fn update_profile<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.user_store);

    use_case
        .execute(identity, request.name, request.avatar)
        .await?;

    Ok(Json(MessageResponse {
        msg: String::from("Updated successfully!"),
    }))
}

/// Promote or demote the account named in the path. The admin gate runs
/// before the body is even read.
#[tracing::instrument(name = "Update role", skip_all)]
pub async fn update_role<U, H, T, M>(
    State(state): State<AppState<U, H, T, M>>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
    T: TokenService + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let use_case = UpdateRoleUseCase::new(state.user_store);

    use_case.execute(id, request.role).await?;

    Ok(Json(MessageResponse {
        msg: String::from("Update role!"),
    }))
}
