use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use minted_core::{Email, Role, User, UserStore, UserStoreError};
use secrecy::Secret;
use uuid::Uuid;

/// In-memory user store for tests and local runs.
///
/// The email uniqueness check and the insert happen under one write lock,
/// which is this store's version of the unique index a database provides.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_password_hash(password_hash);
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: String,
        avatar: String,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_profile(name, avatar);
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_role(role);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| (u.created_at(), u.id()));
        Ok(all)
    }
}
