use minted_core::{RequestIdentity, UserStore, UserStoreError};

/// Error types specific to the update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Update profile use case - lets an account change its own display name
/// and avatar. Role and email are out of reach here.
pub struct UpdateProfileUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the update profile use case
    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        identity: RequestIdentity,
        name: String,
        avatar: String,
    ) -> Result<(), UpdateProfileError> {
        self.user_store
            .update_profile(identity.user_id, name, avatar)
            .await?;

        Ok(())
    }
}
