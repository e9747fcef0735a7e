use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::email::Email;

/// Avatar assigned to accounts that never uploaded one.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.minted.dev/avatars/default.png";

/// Authorization role attached to every account. New accounts always start
/// out as regular users and are promoted by an existing admin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// A persisted account. The password hash never leaves the domain except
/// through the stores, and `sanitized` is the only representation that is
/// ever serialized into a response.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    name: String,
    email: Email,
    password_hash: Secret<String>,
    role: Role,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with default role and avatar.
    pub fn new(name: String, email: Email, password_hash: Secret<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: Role::default(),
            avatar: DEFAULT_AVATAR_URL.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Rehydrate an account from stored fields.
    pub fn from_parts(
        id: Uuid,
        name: String,
        email: Email,
        password_hash: Secret<String>,
        role: Role,
        avatar: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            avatar,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_password_hash(&mut self, password_hash: Secret<String>) {
        self.password_hash = password_hash;
    }

    pub fn set_profile(&mut self, name: String, avatar: String) {
        self.name = name;
        self.avatar = avatar;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.as_ref().expose_secret().clone(),
            role: self.role,
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// Response representation of an account, with the password hash stripped.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}
