use minted_core::{Role, UserStore, UserStoreError};
use uuid::Uuid;

/// Error types specific to the update role use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateRoleError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Update role use case - promotes or demotes the account named in the
/// request path. Only reachable through the admin gate.
pub struct UpdateRoleUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> UpdateRoleUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the update role use case
    #[tracing::instrument(name = "UpdateRoleUseCase::execute", skip(self))]
    pub async fn execute(&self, target: Uuid, role: Role) -> Result<(), UpdateRoleError> {
        match self.user_store.update_role(target, role).await {
            Ok(()) => Ok(()),
            Err(UserStoreError::UserNotFound) => Err(UpdateRoleError::UserNotFound),
            Err(e) => Err(UpdateRoleError::UserStoreError(e)),
        }
    }
}
